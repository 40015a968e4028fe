//! Loader tests against a real HTTP backend
//!
//! Each test starts an in-process axum server on an ephemeral port and points
//! a `BackendClient` at it.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cryptolens::config::{ApiConfig, BackendConfig, TargetsConfig};
use cryptolens::{
    build_router, render, AppState, BackendClient, FetchError, Loader, Prediction,
    RenderOptions, SentimentScore, SlotKind,
};

const TOKEN: &str = "So11111111111111111111111111111111111111112";
const WALLET: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
const NFT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn targets() -> TargetsConfig {
    TargetsConfig {
        token_address: Some(TOKEN.to_string()),
        wallet_address: Some(WALLET.to_string()),
        nft_address: Some(NFT.to_string()),
        sentiment_query: "Solana".to_string(),
    }
}

fn loader(base_url: &str, timeout_ms: u64) -> Loader {
    let client = BackendClient::new(BackendConfig {
        base_url: base_url.to_string(),
        request_timeout_ms: timeout_ms,
    })
    .unwrap();
    Loader::new(Arc::new(client), targets())
}

async fn token(Path(address): Path<String>) -> Json<Value> {
    Json(json!({ "address": address, "price": 100, "volume": 5000 }))
}

async fn prediction() -> Json<Value> {
    Json(json!({ "prediction": 101.25 }))
}

async fn wallet(Path(address): Path<String>) -> Json<Value> {
    Json(json!({ "address": address, "transactions": 10 }))
}

async fn sentiment() -> Json<Value> {
    Json(json!({ "average_sentiment": 0.42 }))
}

async fn nft() -> Json<Value> {
    Json(json!({ "name": "Example NFT", "description": "This is an example NFT." }))
}

async fn server_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "Prediction failed.")
}

async fn malformed() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        "{\"name\": \"Example",
    )
}

async fn stall() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(30)).await;
    Json(json!({}))
}

fn backend(
    token: MethodRouter,
    prediction: MethodRouter,
    wallet: MethodRouter,
    sentiment: MethodRouter,
    nft: MethodRouter,
) -> Router {
    Router::new()
        .route("/token/:address", token)
        .route("/predict/arima", prediction)
        .route("/wallet/:address", wallet)
        .route("/sentiment/:query", sentiment)
        .route("/nft/:address", nft)
}

fn healthy_router() -> Router {
    backend(get(token), get(prediction), get(wallet), get(sentiment), get(nft))
}

#[tokio::test]
async fn test_every_section_echoes_its_payload() {
    let base = spawn_backend(healthy_router()).await;
    let state = loader(&base, 5000).load().await;

    assert_eq!(state.ready_slots(), SlotKind::ALL.to_vec());
    assert_eq!(
        state.token.ready().unwrap().0,
        json!({ "address": TOKEN, "price": 100, "volume": 5000 })
    );
    assert_eq!(state.prediction.ready(), Some(&Prediction::Number(101.25)));
    assert_eq!(state.wallet.ready().unwrap().0["address"], json!(WALLET));
    assert_eq!(state.sentiment.ready(), Some(&SentimentScore(0.42)));
    assert_eq!(
        state.nft.ready().unwrap().0,
        json!({ "name": "Example NFT", "description": "This is an example NFT." })
    );
}

#[tokio::test]
async fn test_server_error_hides_only_that_section() {
    let router = backend(
        get(token),
        get(server_error),
        get(wallet),
        get(sentiment),
        get(nft),
    );
    let base = spawn_backend(router).await;

    let state = loader(&base, 5000).load().await;

    assert_eq!(
        state.prediction.error(),
        Some(&FetchError::Http {
            status: 500,
            body: "Prediction failed.".to_string()
        })
    );
    assert_eq!(
        state.ready_slots(),
        vec![
            SlotKind::Token,
            SlotKind::Wallet,
            SlotKind::Sentiment,
            SlotKind::Nft
        ]
    );

    let page = render(&state, &RenderOptions::default());
    assert!(!page.contains("Price Prediction"));
    assert!(page.contains("Wallet Data"));
}

#[tokio::test]
async fn test_malformed_json_is_a_failed_slot() {
    let router = backend(
        get(token),
        get(prediction),
        get(wallet),
        get(sentiment),
        get(malformed),
    );
    let base = spawn_backend(router).await;

    let state = loader(&base, 5000).load().await;

    assert!(matches!(state.nft.error(), Some(FetchError::Decode(_))));
    assert_eq!(state.ready_slots().len(), 4);
}

#[tokio::test]
async fn test_missing_field_is_a_failed_slot() {
    async fn wrong_shape() -> Json<Value> {
        Json(json!({ "score": 0.42 }))
    }

    let router = backend(
        get(token),
        get(prediction),
        get(wallet),
        get(wrong_shape),
        get(nft),
    );
    let base = spawn_backend(router).await;

    let state = loader(&base, 5000).load().await;

    assert!(matches!(state.sentiment.error(), Some(FetchError::Decode(_))));
    assert!(state.prediction.is_ready());
}

#[tokio::test]
async fn test_unreachable_backend_fails_every_slot() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = loader(&format!("http://{}", addr), 2000).load().await;

    assert!(state.is_settled());
    assert!(state.ready_slots().is_empty());
    for (_, err) in state.failures() {
        assert!(matches!(err, FetchError::Unavailable(_)), "unexpected {:?}", err);
    }
    assert_eq!(state.failures().len(), 5);
}

#[tokio::test]
async fn test_dropped_connection_fails_every_slot() {
    // Accept each connection and close it without answering
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });

    let state = loader(&format!("http://{}", addr), 2000).load().await;

    assert!(state.is_settled());
    assert!(state.ready_slots().is_empty());
    assert_eq!(state.failures().len(), 5);
    assert!(render(&state, &RenderOptions::default()).ends_with("===\n"));
}

#[tokio::test]
async fn test_only_sentiment_answers() {
    let router = backend(get(stall), get(stall), get(stall), get(sentiment), get(stall));
    let base = spawn_backend(router).await;

    let state = loader(&base, 300).load().await;

    assert_eq!(state.ready_slots(), vec![SlotKind::Sentiment]);
    assert_eq!(state.token.error(), Some(&FetchError::Timeout));

    let page = render(&state, &RenderOptions::default());
    assert_eq!(
        page,
        "Crypto Analysis App\n===================\n\nSentiment Analysis\n------------------\nAverage Sentiment: 0.42\n"
    );
}

#[tokio::test]
async fn test_slots_update_as_responses_arrive() {
    async fn slow_token() -> Json<Value> {
        tokio::time::sleep(Duration::from_millis(300)).await;
        Json(json!({ "price": 100 }))
    }

    let router = backend(
        get(slow_token),
        get(prediction),
        get(wallet),
        get(sentiment),
        get(nft),
    );
    let base = spawn_backend(router).await;
    let loader = loader(&base, 5000);

    let mut mount = loader.mount();
    assert!(render(&mount.snapshot(), &RenderOptions::default()).ends_with("===\n"));

    // The four fast slots land while the token request is still in flight
    let mut state = mount.snapshot();
    while state.ready_slots().len() < 4 {
        state = mount.changed().await.unwrap();
    }
    assert!(state.token.is_pending());

    let state = mount.settled().await;
    assert!(state.token.is_ready());
}

#[tokio::test]
async fn test_remount_sends_fresh_requests() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let counting_prediction = get(move || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Json(json!({ "prediction": "bullish" }))
        }
    });
    let router = backend(
        get(token),
        counting_prediction,
        get(wallet),
        get(sentiment),
        get(nft),
    );
    let base = spawn_backend(router).await;
    let loader = loader(&base, 5000);

    let first = loader.load().await;
    let second = loader.load().await;

    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(first.prediction.ready(), Some(&Prediction::Text("bullish".to_string())));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_against_demo_backend() {
    let mut config = ApiConfig::default();
    config.price_history = vec![100.0, 102.0];
    config
        .sentiment_scores
        .insert("solana".to_string(), vec![0.42]);
    let base = spawn_backend(build_router(AppState::new(config))).await;

    let state = loader(&base, 5000).load().await;

    assert_eq!(state.ready_slots(), SlotKind::ALL.to_vec());
    assert_eq!(state.prediction.ready(), Some(&Prediction::Number(104.0)));
    assert_eq!(state.sentiment.ready(), Some(&SentimentScore(0.42)));
    assert_eq!(state.token.ready().unwrap().0["market_cap"], json!(1_000_000.0));
}

#[tokio::test]
async fn test_demo_backend_rejects_placeholder_addresses() {
    let base = spawn_backend(build_router(AppState::new(ApiConfig::default()))).await;
    let client = BackendClient::new(BackendConfig {
        base_url: base,
        request_timeout_ms: 5000,
    })
    .unwrap();

    let mut placeholder_targets = targets();
    placeholder_targets.token_address = Some("<TOKEN_ADDRESS>".to_string());
    let state = Loader::new(Arc::new(client), placeholder_targets).load().await;

    assert!(matches!(
        state.token.error(),
        Some(FetchError::Http { status: 400, .. })
    ));
    assert!(state.wallet.is_ready());
}
