#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use armory_types::{
        errors::ApplicationError,
        hero::Hero,
        page::{Page, PageRequest, SortDirection, SortField},
    };

    use crate::{
        repository::HeroRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    #[derive(Default, Clone)]
    pub struct MockHeroRepository {
        heroes: Arc<Mutex<HashMap<i64, Hero>>>,
        next_id: Arc<Mutex<i64>>,
    }

    impl MockHeroRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count(&self) -> usize {
            self.heroes.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HeroRepository for MockHeroRepository {
        async fn save(&self, hero: &Hero) -> Result<Hero, ApplicationError> {
            let mut heroes = self.heroes.lock().unwrap();
            let mut next_id = self.next_id.lock().unwrap();

            let id = match hero.id {
                Some(id) => {
                    // Keep the sequence ahead of explicitly supplied ids.
                    *next_id = (*next_id).max(id);
                    id
                }
                None => {
                    *next_id += 1;
                    *next_id
                }
            };

            let saved = Hero {
                id: Some(id),
                name: hero.name.clone(),
            };
            heroes.insert(id, saved.clone());
            Ok(saved)
        }

        async fn find_by_id(&self, hero_id: i64) -> Result<Option<Hero>, ApplicationError> {
            Ok(self.heroes.lock().unwrap().get(&hero_id).cloned())
        }

        async fn find_all(&self, page: &PageRequest) -> Result<Page<Hero>, ApplicationError> {
            let mut all: Vec<Hero> = self.heroes.lock().unwrap().values().cloned().collect();

            // Stable sort applied from the least significant key backwards.
            for order in page.sort.iter().rev() {
                all.sort_by(|a, b| {
                    let ordering = match order.field {
                        SortField::Id => a.id.cmp(&b.id),
                        SortField::Name => a.name.cmp(&b.name),
                    };
                    match order.direction {
                        SortDirection::Asc => ordering,
                        SortDirection::Desc => ordering.reverse(),
                    }
                });
            }

            let total = all.len() as u64;
            let start = (page.offset() as usize).min(all.len());
            let end = (start + page.size as usize).min(all.len());

            Ok(Page {
                content: all[start..end].to_vec(),
                number: page.page,
                size: page.size,
                total_elements: total,
            })
        }

        async fn exists_by_id(&self, hero_id: i64) -> Result<bool, ApplicationError> {
            Ok(self.heroes.lock().unwrap().contains_key(&hero_id))
        }

        async fn delete_by_id(&self, hero_id: i64) -> Result<(), ApplicationError> {
            self.heroes.lock().unwrap().remove(&hero_id);
            Ok(())
        }
    }

    pub struct MockUnitOfWork {
        heroes: MockHeroRepository,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self {
                heroes: MockHeroRepository::new(),
            }
        }

        pub fn with_heroes(heroes: MockHeroRepository) -> Self {
            Self { heroes }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn heroes(&self) -> Arc<dyn HeroRepository + 'a> {
            Arc::new(self.heroes.clone())
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    /// Hands every Unit of Work the same shared in-memory store, so writes
    /// stay visible across operations (commit and rollback are no-ops).
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        heroes: MockHeroRepository,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn heroes(&self) -> MockHeroRepository {
            self.heroes.clone()
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            Ok(Box::new(MockUnitOfWork::with_heroes(self.heroes.clone())))
        }
    }
}
