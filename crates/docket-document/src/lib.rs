//! Docket Document - In-Memory Document Store
//!
//! Append-only document storage with identifier generation, lookup by ID,
//! and multi-field search.
//!
//! Key Features:
//! - UUID v4 identifiers assigned on save when missing
//! - Insertion-ordered linear search
//! - Prefix, substring, author membership and creation range filters
//!
//! @version 0.1.0
//! @author Docket Development Team

pub mod criteria;
pub mod store;
pub mod types;

pub use criteria::{SearchCriteria, SearchCriteriaBuilder};
pub use store::DocumentStore;
pub use types::{Author, AuthorId, Document, DocumentId};
