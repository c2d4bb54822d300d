use async_trait::async_trait;
use std::sync::Arc;

use armory_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListHeroes},
    uow::UnitOfWork,
};

pub struct ListHeroesHandler {}

impl ListHeroesHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListHeroes> for ListHeroesHandler {
    async fn handle(
        &self,
        query: ListHeroes,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListHeroes as Query>::Output, ApplicationError> {
        let repo = uow.heroes();
        repo.find_all(&query.page).await
    }
}
