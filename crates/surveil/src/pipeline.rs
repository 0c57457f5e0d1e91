use crate::prelude::*;
use crate::scryfall::ScryfallClient;
use surveil_core::decklist::parse_decklist;
use surveil_core::query_set::QuerySet;
use surveil_core::resolve::{assemble, ImportResult};

/// Resolve a pasted decklist into one item per surviving line
///
/// Parse, deduplicate, look up and assemble, in that order. Lookup failures end up
/// as `data: null` entries; only an empty decklist or an orchestration fault is
/// returned as an error.
pub async fn run_import(
    client: &ScryfallClient,
    decklist: &str,
) -> std::result::Result<ImportResult, Error> {
    let queries = parse_decklist(decklist);
    if queries.is_empty() {
        return Err(Error::BadRequest(
            "Decklist contains no card lines".to_string(),
        ));
    }

    let query_set = QuerySet::from_queries(&queries);
    log::info!(
        "Resolving {} decklist lines ({} unique names)",
        queries.len(),
        query_set.len()
    );

    let results = client.lookup_all(&query_set).await;

    let failed = results.values().filter(|o| o.is_failure()).count();
    if failed > 0 {
        log::warn!("{failed} of {} lookups failed", results.len());
    }

    Ok(assemble(&queries, &results)?)
}
