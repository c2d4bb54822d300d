use armory_types::{
    hero::Hero,
    page::{Page, PageRequest},
};

use crate::cqrs::Query;

/// Fetch a hero by id.
pub struct GetHeroById {
    pub hero_id: i64,
}

impl Query for GetHeroById {
    type Output = Hero;
}

/// Fetch one page of heroes per the given page spec.
pub struct ListHeroes {
    pub page: PageRequest,
}

impl Query for ListHeroes {
    type Output = Page<Hero>;
}
