use armory_types::hero::{Hero, HeroPayload};

use crate::cqrs::Command;

/// Create a new hero. The body must not carry an id; the store assigns one.
#[derive(Debug, Clone)]
pub struct CreateHero {
    pub payload: HeroPayload,
}

impl Command for CreateHero {
    type Output = Hero;
}

/// Fully overwrite an existing hero identified by the path id.
#[derive(Debug, Clone)]
pub struct ReplaceHero {
    pub path_id: i64,
    pub payload: HeroPayload,
}

impl Command for ReplaceHero {
    type Output = Hero;
}

/// Merge-patch an existing hero: only fields present in the payload
/// overwrite the stored record.
#[derive(Debug, Clone)]
pub struct PartialUpdateHero {
    pub path_id: i64,
    pub payload: HeroPayload,
}

impl Command for PartialUpdateHero {
    type Output = Hero;
}

/// Delete a hero by id. Deleting an absent id is a no-op.
#[derive(Debug, Clone)]
pub struct DeleteHero {
    pub hero_id: i64,
}

impl Command for DeleteHero {
    type Output = ();
}
