//! The in-memory article registry.
//!
//! Articles are kept in creation order. Ids come from a counter that starts
//! at 1 and only ever moves forward, so an id is never handed out twice, not
//! even after the article that held it is deleted.

use tracing::debug;

use crate::article::{Article, ArticleId, ArticleInput};

#[derive(Debug)]
pub struct Registry {
    articles: Vec<Article>,
    next_id: ArticleId,
}

impl Registry {
    pub fn new() -> Self {
        Self { articles: Vec::new(), next_id: 1 }
    }

    /// Every article, in creation order.
    pub fn list(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// The id the next [`create`](Registry::create) will assign.
    pub fn next_id(&self) -> ArticleId {
        self.next_id
    }

    /// Appends a new article under the next id.
    pub fn create(&mut self, input: ArticleInput) -> Article {
        let article = Article::from_input(self.next_id, input);
        self.articles.push(article.clone());
        self.next_id += 1;

        debug!(id = article.id, "article created");
        article
    }

    /// Replaces the article with `id` in place, keeping its id and position.
    pub fn update(&mut self, id: ArticleId, input: ArticleInput) -> Option<Article> {
        let index = self.position(id)?;
        let article = Article::from_input(id, input);
        self.articles[index] = article.clone();

        debug!(id, index, "article updated");
        Some(article)
    }

    /// Removes the article with `id`. Later articles shift down one position.
    pub fn delete(&mut self, id: ArticleId) -> Option<Article> {
        let index = self.position(id)?;
        let article = self.articles.remove(index);

        debug!(id, index, "article deleted");
        Some(article)
    }

    fn position(&self, id: ArticleId) -> Option<usize> {
        self.articles.iter().position(|a| a.id == id)
    }
}

impl Default for Registry {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::Registry;
    use crate::article::{Article, ArticleInput};

    fn input(name: &str, price: f64) -> ArticleInput {
        ArticleInput { name: name.to_owned(), price }
    }

    #[test]
    fn starts_empty_with_id_one() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.next_id(), 1);
    }

    #[test]
    fn create_appends_with_increasing_ids() {
        let mut registry = Registry::new();
        let mut last = 0;

        for n in 0..5 {
            let article = registry.create(input("a", f64::from(n)));
            assert!(article.id > last);
            assert_eq!(registry.list().last(), Some(&article));
            last = article.id;
        }

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.next_id(), 6);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut registry = Registry::new();
        registry.create(input("a", 1.0));
        registry.create(input("b", 2.0));
        registry.create(input("c", 3.0));

        let updated = registry.update(2, input("B", 20.0)).unwrap();

        assert_eq!(updated, Article { id: 2, name: "B".into(), price: 20.0 });
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.list()[1], updated);
        assert_eq!(registry.next_id(), 4);
    }

    #[test]
    fn update_of_missing_id_changes_nothing() {
        let mut registry = Registry::new();
        registry.create(input("a", 1.0));
        let before = registry.list().to_vec();

        assert_eq!(registry.update(42, input("z", 0.0)), None);
        assert_eq!(registry.list(), before.as_slice());
    }

    #[test]
    fn delete_shifts_later_entries_and_never_reuses_ids() {
        let mut registry = Registry::new();
        registry.create(input("a", 1.0));
        registry.create(input("b", 2.0));
        registry.create(input("c", 3.0));

        let removed = registry.delete(1).unwrap();
        assert_eq!(removed.name, "a");

        let ids: Vec<_> = registry.list().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert_eq!(registry.delete(1), None);
        assert_eq!(registry.update(1, input("again", 0.0)), None);
        assert_eq!(registry.create(input("d", 4.0)).id, 4);
    }

    #[test]
    fn delete_of_missing_id_is_a_no_op() {
        let mut registry = Registry::new();
        registry.create(input("a", 1.0));

        assert_eq!(registry.delete(7), None);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.next_id(), 2);
    }
}
