use std::sync::Arc;

use armory_types::errors::{AppError, ApplicationError, DbError};

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, commands::PartialUpdateHero},
    uow::UnitOfWork,
};

pub struct PartialUpdateHeroCommandHandler {}

impl PartialUpdateHeroCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<PartialUpdateHero> for PartialUpdateHeroCommandHandler {
    async fn handle(
        &self,
        command: PartialUpdateHero,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<PartialUpdateHero as Command>::Output, ApplicationError> {
        // No field-presence validation here: absent fields are what a
        // merge patch is made of.
        let id = match command.payload.id {
            Some(id) => id,
            None => return Err(AppError::MissingId.into()),
        };
        if id != command.path_id {
            return Err(AppError::IdMismatch {
                path_id: command.path_id,
                body_id: id,
            }
            .into());
        }

        let hero_repo = uow.heroes();
        if !hero_repo.exists_by_id(id).await? {
            return Err(AppError::NotFound(id).into());
        }

        let mut hero = hero_repo
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::Db(DbError::HeroNotFound(id)))?;
        hero.apply_patch(&command.payload);

        let saved = hero_repo.save(&hero).await?;
        Ok(saved)
    }
}
