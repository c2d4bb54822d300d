use std::sync::Arc;

use armory_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, commands::DeleteHero},
    uow::UnitOfWork,
};

pub struct DeleteHeroCommandHandler {}

impl DeleteHeroCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteHero> for DeleteHeroCommandHandler {
    async fn handle(
        &self,
        command: DeleteHero,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<DeleteHero as Command>::Output, ApplicationError> {
        // Idempotent: no existence check before the delete.
        uow.heroes().delete_by_id(command.hero_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use armory_types::hero::Hero;

    use super::*;
    use crate::{config::Config, test_utils::tests::MockUnitOfWork};

    #[tokio::test]
    async fn test_delete_removes_record() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = DeleteHeroCommandHandler::new();

        let saved = mock_uow
            .heroes()
            .save(&Hero::new("AAAAAAAAAA".to_string()))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        handler
            .handle(DeleteHero { hero_id: id }, &mock_uow, &config)
            .await
            .unwrap();

        assert_eq!(mock_uow.heroes().find_by_id(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_of_absent_id_is_a_no_op() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = DeleteHeroCommandHandler::new();

        let result = handler
            .handle(DeleteHero { hero_id: 42 }, &mock_uow, &config)
            .await;

        assert!(result.is_ok());
    }
}
