//! Core library for surveil
//!
//! This crate implements the **Functional Core** of the surveil decklist resolver,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`surveil_core`** (this crate): Pure transformation functions with zero I/O
//! - **`surveil`**: Scryfall lookups, the HTTP endpoint and the CLI (the Imperative Shell)
//!
//! A decklist import flows through the core in one direction:
//!
//! ```text
//! raw text -> DecklistLine -> ParsedQuery -> QuerySet -> (shell: lookups) -> ImportResult
//! ```
//!
//! The only step that touches the network lives in the shell. Every function here is
//! deterministic and can be tested with fixture data, no mocking required.
//!
//! # Module Organization
//!
//! - [`decklist`]: Line splitting, blank-line filtering and the line grammar
//! - [`query_set`]: Deduplication of extracted card names
//! - [`card`]: Card data returned by the card-data service
//! - [`resolve`]: Lookup outcomes and positional reassembly of results
//! - [`summary`]: Aggregate statistics (price, mana curve) over an import
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use surveil_core::decklist::parse_decklist;
//! use surveil_core::query_set::QuerySet;
//! use surveil_core::resolve::{assemble, LookupResults};
//!
//! let queries = parse_decklist("4x Island\n1 Island\nSB: 2 Pithing Needle (NEO) 221");
//! let query_set = QuerySet::from_queries(&queries);
//! assert_eq!(query_set.len(), 2);
//!
//! // The shell fills this in from the card-data service
//! let results: LookupResults = fetch(query_set.names()).await;
//! let items = assemble(&queries, &results)?;
//! assert_eq!(items.len(), 3);
//! ```

pub mod card;
pub mod decklist;
pub mod query_set;
pub mod resolve;
pub mod summary;
