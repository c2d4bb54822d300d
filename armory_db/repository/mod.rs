mod hero_repository;

pub use hero_repository::PostgresHeroRepository;
