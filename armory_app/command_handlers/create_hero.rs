use std::sync::Arc;

use armory_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, commands::CreateHero},
    uow::UnitOfWork,
};

pub struct CreateHeroCommandHandler {}

impl CreateHeroCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateHero> for CreateHeroCommandHandler {
    async fn handle(
        &self,
        command: CreateHero,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<CreateHero as Command>::Output, ApplicationError> {
        let hero = command.payload.into_hero()?;

        // The store assigns ids; a client-supplied one is rejected.
        if hero.id.is_some() {
            return Err(AppError::IdPresentOnCreate.into());
        }

        let saved = uow.heroes().save(&hero).await?;
        Ok(saved)
    }
}
