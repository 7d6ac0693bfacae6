//! Shared, lock-guarded access to the [`Registry`].
//!
//! A [`Catalog`] is what handlers receive. Each operation takes the lock
//! exactly once, so id assignment and insertion on create happen together
//! and concurrent requests see one writer at a time.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::article::{ArticleId, ArticleInput};
use crate::envelope::Envelope;
use crate::registry::Registry;

pub const FETCHED: &str = "Articles fetched successfully";
pub const CREATED: &str = "Article created successfully";
pub const UPDATED: &str = "Article updated successfully";
pub const DELETED: &str = "Article deleted successfully";
pub const NOT_FOUND: &str = "Article not found";

/// Cheaply clonable handle to the process-wide article registry.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    registry: Arc<Mutex<Registry>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Envelope {
        let articles = self.lock().list().to_vec();
        Envelope::success(articles, FETCHED)
    }

    pub fn create(&self, input: ArticleInput) -> Envelope {
        let article = self.lock().create(input);
        Envelope::success(article, CREATED)
    }

    pub fn update(&self, id: ArticleId, input: ArticleInput) -> Envelope {
        match self.lock().update(id, input) {
            Some(article) => Envelope::success(article, UPDATED),
            None => Envelope::failure(NOT_FOUND),
        }
    }

    pub fn delete(&self, id: ArticleId) -> Envelope {
        match self.lock().delete(id) {
            Some(_) => Envelope::success((), DELETED),
            None => Envelope::failure(NOT_FOUND),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every registry mutation is a single push, assignment, or remove, so a
    // panic elsewhere while the lock was held cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::{Catalog, NOT_FOUND};
    use crate::article::ArticleInput;
    use crate::envelope::Data;

    fn input(name: &str) -> ArticleInput {
        ArticleInput { name: name.to_owned(), price: 1.5 }
    }

    #[test]
    fn clones_share_one_registry() {
        let catalog = Catalog::new();
        let other = catalog.clone();

        other.create(input("a"));

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn missing_ids_report_failure() {
        let catalog = Catalog::new();

        for envelope in [catalog.update(1, input("a")), catalog.delete(1)] {
            assert!(!envelope.success);
            assert_eq!(envelope.data, Data::Empty);
            assert_eq!(envelope.message.as_deref(), Some(NOT_FOUND));
        }
        assert!(catalog.is_empty());
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let catalog = Catalog::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = catalog.clone();
                thread::spawn(move || {
                    (0..50)
                        .map(|_| match catalog.create(input("x")).data {
                            Data::One(article) => article.id,
                            other => panic!("unexpected data: {other:?}"),
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 400);
        assert_eq!(catalog.len(), 400);
        assert_eq!(ids.iter().max(), Some(&400));
    }
}
