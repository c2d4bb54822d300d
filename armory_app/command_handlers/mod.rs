mod create_hero;
mod delete_hero;
mod partial_update_hero;
mod replace_hero;

pub use create_hero::CreateHeroCommandHandler;
pub use delete_hero::DeleteHeroCommandHandler;
pub use partial_update_hero::PartialUpdateHeroCommandHandler;
pub use replace_hero::ReplaceHeroCommandHandler;
