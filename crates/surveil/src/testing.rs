//! In-process stand-in for the card-data service, used by tests
//!
//! Serves `GET /cards/named?exact=<name>` from a fixed card list and counts hits
//! per name so tests can assert how many lookups were issued.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use surveil_core::card::{CardRecord, ImageUris, Prices, PurchaseUris};

pub fn card(name: &str) -> CardRecord {
    CardRecord {
        id: Some(format!("id-{}", name.to_lowercase().replace(' ', "-"))),
        name: name.to_string(),
        mana_cost: Some("{1}".to_string()),
        cmc: Some(1.0),
        type_line: Some("Artifact".to_string()),
        set: None,
        collector_number: None,
        scryfall_uri: None,
        prices: Some(Prices {
            usd: Some("1.00".to_string()),
            ..Prices::default()
        }),
        purchase_uris: Some(PurchaseUris {
            tcgplayer: Some(format!("https://tcgplayer.example/{name}")),
            ..PurchaseUris::default()
        }),
        image_uris: Some(ImageUris {
            normal: Some(format!("https://img.example/{name}.jpg")),
            ..ImageUris::default()
        }),
        card_faces: None,
    }
}

#[derive(Default)]
struct StubState {
    cards: HashMap<String, CardRecord>,
    failing: HashSet<String>,
    delay: Duration,
    hits: Mutex<HashMap<String, usize>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

pub struct StubCardService {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubCardService {
    /// Serve `found` as exact matches and answer HTTP 500 for `failing`
    ///
    /// Any other name gets Scryfall's 404 error object.
    pub async fn spawn(found: &[&str], failing: &[&str]) -> Self {
        Self::spawn_with_delay(found, failing, Duration::ZERO).await
    }

    pub async fn spawn_with_delay(found: &[&str], failing: &[&str], delay: Duration) -> Self {
        let state = Arc::new(StubState {
            cards: found
                .iter()
                .map(|name| (name.to_string(), card(name)))
                .collect(),
            failing: failing.iter().map(|name| name.to_string()).collect(),
            delay,
            ..StubState::default()
        });

        let router = Router::new()
            .route("/cards/named", get(named_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn hits(&self, name: &str) -> usize {
        self.state
            .hits
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.state.hits.lock().unwrap().values().sum()
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }
}

async fn named_handler(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let name = params.get("exact").cloned().unwrap_or_default();
    *state.hits.lock().unwrap().entry(name.clone()).or_default() += 1;

    let current = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(current, Ordering::SeqCst);
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    state.in_flight.fetch_sub(1, Ordering::SeqCst);

    if state.failing.contains(&name) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "object": "error",
                "code": "internal_error",
                "status": 500,
                "details": "Something went wrong"
            })),
        )
            .into_response();
    }

    match state.cards.get(&name) {
        Some(record) => Json(record.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "object": "error",
                "code": "not_found",
                "status": 404,
                "details": format!("No cards found matching \"{name}\"")
            })),
        )
            .into_response(),
    }
}

/// Base URL of a local port with nothing listening on it
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
