use sqlx::FromRow;

use armory_types::hero::Hero;

#[derive(Debug, Clone, FromRow)]
pub struct HeroRow {
    pub id: i64,
    pub name: String,
}

impl From<HeroRow> for Hero {
    fn from(row: HeroRow) -> Self {
        Hero {
            id: Some(row.id),
            name: row.name,
        }
    }
}
