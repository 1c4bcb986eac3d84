//! Docket Search Criteria
//!
//! Multi-field filter evaluated against stored documents. Every field is
//! optional; an absent or empty field places no constraint on the result.
//! Fields combine with AND, alternatives inside one field combine with OR.
//!
//! @version 0.1.0
//! @author Docket Development Team

use crate::types::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Search Criteria
// =============================================================================

/// Filter for `DocumentStore::search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub title_prefixes: Option<Vec<String>>,
    pub contains_contents: Option<Vec<String>>,
    pub author_ids: Option<Vec<String>>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchCriteria {
    /// Criteria with no constraints. Matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::new()
    }

    /// Check if a document satisfies every populated field.
    pub fn matches(&self, doc: &Document) -> bool {
        self.matches_title(doc)
            && self.matches_content(doc)
            && self.matches_author(doc)
            && self.matches_created(doc)
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        populated(&self.title_prefixes).is_none()
            && populated(&self.contains_contents).is_none()
            && populated(&self.author_ids).is_none()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }

    fn matches_title(&self, doc: &Document) -> bool {
        populated(&self.title_prefixes)
            .map(|prefixes| prefixes.iter().any(|p| doc.title.starts_with(p.as_str())))
            .unwrap_or(true)
    }

    fn matches_content(&self, doc: &Document) -> bool {
        populated(&self.contains_contents)
            .map(|needles| needles.iter().any(|n| doc.content.contains(n.as_str())))
            .unwrap_or(true)
    }

    fn matches_author(&self, doc: &Document) -> bool {
        populated(&self.author_ids)
            .map(|ids| ids.iter().any(|id| id == doc.author.id.as_str()))
            .unwrap_or(true)
    }

    // Both bounds are inclusive.
    fn matches_created(&self, doc: &Document) -> bool {
        let after_from = self.created_from.map_or(true, |from| doc.created >= from);
        let before_to = self.created_to.map_or(true, |to| doc.created <= to);
        after_from && before_to
    }
}

fn populated(set: &Option<Vec<String>>) -> Option<&[String]> {
    set.as_deref().filter(|values| !values.is_empty())
}

// =============================================================================
// Search Criteria Builder
// =============================================================================

/// Builder for constructing search criteria.
pub struct SearchCriteriaBuilder {
    criteria: SearchCriteria,
}

impl SearchCriteriaBuilder {
    pub fn new() -> Self {
        Self {
            criteria: SearchCriteria::new(),
        }
    }

    pub fn title_prefix(mut self, prefix: impl Into<String>) -> Self {
        push(&mut self.criteria.title_prefixes, prefix.into());
        self
    }

    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.criteria.title_prefixes, prefixes);
        self
    }

    pub fn contains_content(mut self, needle: impl Into<String>) -> Self {
        push(&mut self.criteria.contains_contents, needle.into());
        self
    }

    pub fn contains_contents<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.criteria.contains_contents, needles);
        self
    }

    pub fn author_id(mut self, id: impl Into<String>) -> Self {
        push(&mut self.criteria.author_ids, id.into());
        self
    }

    pub fn author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.criteria.author_ids, ids);
        self
    }

    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.criteria.created_from = Some(from);
        self
    }

    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.criteria.created_to = Some(to);
        self
    }

    pub fn build(self) -> SearchCriteria {
        self.criteria
    }
}

impl Default for SearchCriteriaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn push(set: &mut Option<Vec<String>>, value: String) {
    set.get_or_insert_with(Vec::new).push(value);
}

fn extend<I, S>(set: &mut Option<Vec<String>>, values: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    set.get_or_insert_with(Vec::new)
        .extend(values.into_iter().map(Into::into));
}

// =============================================================================
// Tests
// =============================================================================
