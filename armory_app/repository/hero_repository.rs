use armory_types::errors::ApplicationError;
use armory_types::hero::Hero;
use armory_types::page::{Page, PageRequest};

#[async_trait::async_trait]
pub trait HeroRepository: Send + Sync {
    /// Saves a hero (creates if new, overwrites if it exists) and returns
    /// the stored record with its id.
    async fn save(&self, hero: &Hero) -> Result<Hero, ApplicationError>;

    /// Returns a hero by id, if present.
    async fn find_by_id(&self, hero_id: i64) -> Result<Option<Hero>, ApplicationError>;

    /// Returns one page of heroes, ordered per the page spec, plus the
    /// total record count.
    async fn find_all(&self, page: &PageRequest) -> Result<Page<Hero>, ApplicationError>;

    /// Checks whether a hero with the given id exists.
    async fn exists_by_id(&self, hero_id: i64) -> Result<bool, ApplicationError>;

    /// Deletes a hero by id. Deleting an absent id is not an error.
    async fn delete_by_id(&self, hero_id: i64) -> Result<(), ApplicationError>;
}
