mod helpers;
mod hero_handler;
mod pagination;

pub use helpers::{ApiError, ErrorBody};
pub use hero_handler::{
    create_hero, delete_hero, get_hero, list_heroes, partial_update_hero, replace_hero,
};
pub use pagination::{PageParams, pagination_headers};
