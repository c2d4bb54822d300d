mod get_hero_by_id;
mod list_heroes;

pub use get_hero_by_id::GetHeroByIdHandler;
pub use list_heroes::ListHeroesHandler;
