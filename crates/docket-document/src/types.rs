//! Docket Document Types
//!
//! Core data types for document storage.
//!
//! @version 0.1.0
//! @author Docket Development Team

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Document ID
// =============================================================================

/// Identifier for a document. May be empty until the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random UUID v4, hyphenated.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// =============================================================================
// Author
// =============================================================================

/// Identifier for an author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub String);

impl AuthorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AuthorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AuthorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The author a document is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default = "AuthorId::generate")]
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    /// Create an author with a generated ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AuthorId::generate(),
            name: name.into(),
        }
    }

    /// Create an author with a specific ID.
    pub fn with_id(id: impl Into<AuthorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Document
// =============================================================================

/// A document in the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl Document {
    /// Create a new document with an auto-generated ID.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DocumentId::generate(),
            title: title.into(),
            content: content.into(),
            author,
            created,
        }
    }

    /// Replace the ID. An empty ID is replaced again by the store on save.
    pub fn with_id(mut self, id: impl Into<DocumentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Parse a JSON array of documents. Missing IDs deserialize as empty.
    pub fn list_from_json(json: &str) -> docket_common::Result<Vec<Document>> {
        Ok(serde_json::from_str(json)?)
    }
}

// =============================================================================
// Tests
// =============================================================================
