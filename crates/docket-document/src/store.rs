//! Docket Document Store
//!
//! Ordered, append-only, in-memory document storage.
//!
//! @version 0.1.0
//! @author Docket Development Team

use crate::criteria::SearchCriteria;
use crate::types::{Document, DocumentId};
use docket_common::StoreConfig;

// =============================================================================
// Document Store
// =============================================================================

/// An ordered collection of documents, kept in insertion order.
///
/// `save` never deduplicates: saving twice under one ID stores two entries,
/// and `find_by_id` returns the earlier one.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    name: String,
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Create an empty store from configuration.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            name: config.name.clone(),
            documents: Vec::with_capacity(config.initial_capacity),
        }
    }

    /// Get the store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // -------------------------------------------------------------------------
    // Document Operations
    // -------------------------------------------------------------------------

    /// Append a document, generating an ID if it has none.
    pub fn save(&mut self, mut doc: Document) -> Document {
        let generated = !doc.has_id();
        if generated {
            doc.id = DocumentId::generate();
        }

        tracing::debug!(
            store = %self.name,
            id = %doc.id,
            generated,
            "Saved document"
        );

        self.documents.push(doc.clone());
        doc
    }

    /// Get the first document stored under an ID.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        self.documents
            .iter()
            .find(|doc| doc.id.as_str() == id)
            .cloned()
    }

    /// Get the number of stored documents, duplicates included.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over stored documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    // -------------------------------------------------------------------------
    // Query Operations
    // -------------------------------------------------------------------------

    /// Find documents matching the criteria, in insertion order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Document> {
        let matching: Vec<Document> = self
            .documents
            .iter()
            .filter(|doc| criteria.matches(doc))
            .cloned()
            .collect();

        tracing::trace!(
            store = %self.name,
            scanned = self.documents.len(),
            matched = matching.len(),
            "Search finished"
        );

        matching
    }

    /// Count documents matching the criteria.
    pub fn count_matching(&self, criteria: &SearchCriteria) -> usize {
        self.documents
            .iter()
            .filter(|doc| criteria.matches(doc))
            .count()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Document> for DocumentStore {
    fn extend<I: IntoIterator<Item = Document>>(&mut self, docs: I) {
        for doc in docs {
            self.save(doc);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Author;
    use chrono::{TimeZone, Utc};

    fn doc(title: &str, content: &str) -> Document {
        Document::new(
            title,
            content,
            Author::with_id("roman", "Roman"),
            Utc.with_ymd_and_hms(2024, 7, 17, 10, 15, 30).unwrap(),
        )
    }

    #[test]
    fn test_store_creation() {
        let store = DocumentStore::new();
        assert_eq!(store.name(), "documents");
        assert!(store.is_empty());

        let config = StoreConfig {
            name: "drafts".to_string(),
            initial_capacity: 0,
        };
        let store = DocumentStore::with_config(&config);
        assert_eq!(store.name(), "drafts");
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_save_generates_missing_id() {
        let mut store = DocumentStore::new();

        let input = doc("Test Document", "test document.").with_id("");
        let saved = store.save(input.clone());

        assert!(saved.has_id());
        assert_eq!(saved.title, input.title);
        assert_eq!(saved.content, input.content);
        assert_eq!(saved.author, input.author);
        assert_eq!(saved.created, input.created);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_keeps_existing_id() {
        let mut store = DocumentStore::new();

        let saved = store.save(doc("A", "a").with_id("doc-1"));
        assert_eq!(saved.id.as_str(), "doc-1");
        assert_eq!(store.find_by_id("doc-1"), Some(saved));
    }

    #[test]
    fn test_save_appends_duplicates() {
        let mut store = DocumentStore::new();

        store.save(doc("First", "one").with_id("same-id"));
        store.save(doc("Second", "two").with_id("same-id"));

        assert_eq!(store.len(), 2);
        let found = store.find_by_id("same-id").unwrap();
        assert_eq!(found.title, "First");
    }

    #[test]
    fn test_find_by_id_missing() {
        let mut store = DocumentStore::new();
        store.save(doc("A", "a").with_id("doc-1"));

        assert!(store.find_by_id("non-existent-id").is_none());
        assert!(store.find_by_id("").is_none());
        assert!(store.find_by_id("DOC-1").is_none());
    }

    #[test]
    fn test_search_preserves_order() {
        let mut store = DocumentStore::new();
        for title in ["c", "a", "b"] {
            store.save(doc(title, "body"));
        }

        let titles: Vec<String> = store
            .search(&SearchCriteria::new())
            .into_iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_search_does_not_alias_storage() {
        let mut store = DocumentStore::new();
        store.save(doc("Original", "body").with_id("doc-1"));

        let mut results = store.search(&SearchCriteria::new());
        results[0].title = "Changed".to_string();

        assert_eq!(store.find_by_id("doc-1").unwrap().title, "Original");
    }

    #[test]
    fn test_count_matching() {
        let mut store = DocumentStore::new();
        store.save(doc("Doc 1", "alpha"));
        store.save(doc("Doc 2", "beta"));
        store.save(doc("Note", "alpha"));

        let criteria = SearchCriteria::builder().contains_content("alpha").build();
        assert_eq!(store.count_matching(&criteria), 2);
        assert_eq!(store.search(&criteria).len(), 2);
    }

    #[test]
    fn test_extend_saves_each() {
        let mut store = DocumentStore::new();
        store.extend(vec![doc("A", "a").with_id(""), doc("B", "b")]);

        assert_eq!(store.len(), 2);
        assert!(store.iter().all(|d| d.has_id()));
    }
}
