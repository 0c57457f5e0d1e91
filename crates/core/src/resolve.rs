//! Lookup outcomes and positional reassembly
//!
//! The shell fetches one outcome per unique name; [`assemble`] joins those outcomes
//! back onto the parsed lines in their original order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::card::{CardRecord, ServiceError};
use crate::decklist::ParsedQuery;

/// Errors raised while assembling an import
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("No lookup outcome recorded for card name: {0}")]
    MissingLookup(String),
}

/// Result of one exact-name lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(CardRecord),
    /// The service answered but has no card with this exact name
    NotFound,
    /// Transport error, non-success status or unreadable payload
    Failed(String),
}

impl LookupOutcome {
    pub fn record(&self) -> Option<&CardRecord> {
        match self {
            LookupOutcome::Found(record) => Some(record),
            LookupOutcome::NotFound | LookupOutcome::Failed(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LookupOutcome::Failed(_))
    }
}

/// Completion map keyed by exact card name
pub type LookupResults = HashMap<String, LookupOutcome>;

/// One output record per surviving decklist line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedItem {
    pub name: String,
    pub data: Option<CardRecord>,
}

/// Ordered response payload for one import
pub type ImportResult = Vec<ResolvedItem>;

/// Interpret a `/cards/named` response from its status code and body text
///
/// - 2xx with a card object is `Found`
/// - 404 is `NotFound`, whatever the body says
/// - anything else, or a body that is not a card, is `Failed`
pub fn interpret_named_response(status: u16, body: &str) -> LookupOutcome {
    if status == 404 {
        return LookupOutcome::NotFound;
    }

    if !(200..300).contains(&status) {
        let details = serde_json::from_str::<ServiceError>(body)
            .ok()
            .and_then(|error| error.details)
            .unwrap_or_else(|| "no details".to_string());
        return LookupOutcome::Failed(format!("HTTP {status}: {details}"));
    }

    if let Ok(error) = serde_json::from_str::<ServiceError>(body) {
        if error.object == "error" {
            return LookupOutcome::Failed(format!(
                "Service error with HTTP {status}: {}",
                error.details.unwrap_or_default()
            ));
        }
    }

    match serde_json::from_str::<CardRecord>(body) {
        Ok(record) => LookupOutcome::Found(record),
        Err(e) => LookupOutcome::Failed(format!("Failed to parse card payload: {e}")),
    }
}

/// Join lookup outcomes back onto the parsed lines
///
/// Emits exactly one item per query, in query order. Unparseable lines keep their
/// raw text as the name. Not-found and failed lookups both surface as `data: null`.
/// A parsed name with no recorded outcome is an orchestration fault.
pub fn assemble(
    queries: &[ParsedQuery],
    results: &LookupResults,
) -> Result<ImportResult, ResolveError> {
    queries
        .iter()
        .map(|query| match &query.extracted_name {
            None => Ok(ResolvedItem {
                name: query.display_name().to_string(),
                data: None,
            }),
            Some(name) => results
                .get(name)
                .map(|outcome| ResolvedItem {
                    name: name.clone(),
                    data: outcome.record().cloned(),
                })
                .ok_or_else(|| ResolveError::MissingLookup(name.clone())),
        })
        .collect()
}
