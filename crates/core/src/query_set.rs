//! Deduplication of extracted card names
//!
//! Names are compared exactly and case-sensitively. Fuzzy matching is left to the
//! card-data service.

use std::collections::HashSet;

use crate::decklist::ParsedQuery;

/// Distinct card names to look up, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySet {
    names: Vec<String>,
}

impl QuerySet {
    /// Collect the distinct non-empty names from parsed lines
    ///
    /// The line-to-name mapping stays on the `ParsedQuery` values themselves.
    pub fn from_queries(queries: &[ParsedQuery]) -> Self {
        let mut seen = HashSet::new();
        let names = queries
            .iter()
            .filter_map(|query| query.extracted_name.as_deref())
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect();

        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
