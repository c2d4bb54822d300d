use std::sync::Arc;

use armory_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, commands::ReplaceHero},
    uow::UnitOfWork,
};

pub struct ReplaceHeroCommandHandler {}

impl ReplaceHeroCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<ReplaceHero> for ReplaceHeroCommandHandler {
    async fn handle(
        &self,
        command: ReplaceHero,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ReplaceHero as Command>::Output, ApplicationError> {
        let hero = command.payload.into_hero()?;

        let id = match hero.id {
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

        let saved = hero_repo.save(&hero).await?;
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use armory_types::hero::{Hero, HeroPayload};

    use super::*;
    use crate::{config::Config, test_utils::tests::MockUnitOfWork};

    fn payload(id: Option<i64>, name: &str) -> HeroPayload {
        HeroPayload {
            id,
            name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn test_replace_overwrites_stored_record() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = ReplaceHeroCommandHandler::new();

        let existing = mock_uow
            .heroes()
            .save(&Hero::new("AAAAAAAAAA".to_string()))
            .await
            .unwrap();
        let id = existing.id.unwrap();

        let command = ReplaceHero {
            path_id: id,
            payload: payload(Some(id), "BBBBBBBBBB"),
        };
        let saved = handler.handle(command, &mock_uow, &config).await.unwrap();

        assert_eq!(saved.id, Some(id));
        assert_eq!(saved.name, "BBBBBBBBBB");

        let stored = mock_uow.heroes().find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "BBBBBBBBBB");
    }

    #[tokio::test]
    async fn test_replace_without_body_id_fails() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = ReplaceHeroCommandHandler::new();

        let command = ReplaceHero {
            path_id: 1,
            payload: payload(None, "BBBBBBBBBB"),
        };
        let result = handler.handle(command, &mock_uow, &config).await;

        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::MissingId))
        ));
    }

    #[tokio::test]
    async fn test_replace_with_mismatched_id_fails() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = ReplaceHeroCommandHandler::new();

        let command = ReplaceHero {
            path_id: 1,
            payload: payload(Some(2), "BBBBBBBBBB"),
        };
        let result = handler.handle(command, &mock_uow, &config).await;

        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::IdMismatch {
                path_id: 1,
                body_id: 2
            }))
        ));
    }

    #[tokio::test]
    async fn test_replace_missing_record_fails() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = ReplaceHeroCommandHandler::new();

        let command = ReplaceHero {
            path_id: 42,
            payload: payload(Some(42), "BBBBBBBBBB"),
        };
        let result = handler.handle(command, &mock_uow, &config).await;

        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::NotFound(42)))
        ));
    }
}
