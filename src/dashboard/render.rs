//! Page Rendering
//!
//! Pure functions from [`DashboardState`] to output. A section appears only
//! when its slot is ready; pending and failed slots render nothing unless
//! diagnostics are requested.

use serde_json::{json, Map, Value};
use std::fmt::Write;

use super::state::{DashboardState, SlotKind};

/// Page title
pub const TITLE: &str = "Crypto Analysis App";

/// Rendering options
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Line printed under the title (wallet provider summary)
    pub header: Option<String>,
    /// Append a block listing failed slots
    pub show_errors: bool,
}

/// A rendered section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SlotKind,
    pub body: String,
}

/// Sections for every ready slot, in page order
pub fn sections(state: &DashboardState) -> Vec<Section> {
    let mut out = Vec::new();

    if let Some(token) = state.token.ready() {
        out.push(section(SlotKind::Token, pretty(&token.0)));
    }
    if let Some(prediction) = state.prediction.ready() {
        out.push(section(
            SlotKind::Prediction,
            format!("Predicted Price: {}", prediction),
        ));
    }
    if let Some(wallet) = state.wallet.ready() {
        out.push(section(SlotKind::Wallet, pretty(&wallet.0)));
    }
    if let Some(sentiment) = state.sentiment.ready() {
        out.push(section(
            SlotKind::Sentiment,
            format!("Average Sentiment: {}", sentiment),
        ));
    }
    if let Some(nft) = state.nft.ready() {
        out.push(section(SlotKind::Nft, pretty(&nft.0)));
    }

    out
}

fn section(kind: SlotKind, body: String) -> Section {
    Section { kind, body }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render the page as text
pub fn render(state: &DashboardState, options: &RenderOptions) -> String {
    let mut out = String::new();

    heading(&mut out, TITLE, '=');
    if let Some(header) = &options.header {
        let _ = writeln!(out, "{}", header);
    }

    for section in sections(state) {
        out.push('\n');
        heading(&mut out, section.kind.title(), '-');
        let _ = writeln!(out, "{}", section.body);
    }

    if options.show_errors {
        let failures = state.failures();
        if !failures.is_empty() {
            out.push('\n');
            heading(&mut out, "Unavailable", '-');
            for (kind, err) in failures {
                let _ = writeln!(out, "{}: {}", kind.title(), err);
            }
        }
    }

    out
}

fn heading(out: &mut String, text: &str, underline: char) {
    let _ = writeln!(out, "{}", text);
    let _ = writeln!(out, "{}", underline.to_string().repeat(text.chars().count()));
}

/// Render the page as JSON: one key per slot, `null` unless ready
pub fn render_json(state: &DashboardState, options: &RenderOptions) -> Value {
    let mut slots = Map::new();
    slots.insert(
        SlotKind::Token.key().to_string(),
        state.token.ready().map(|t| t.0.clone()).unwrap_or(Value::Null),
    );
    slots.insert(
        SlotKind::Prediction.key().to_string(),
        state
            .prediction
            .ready()
            .map(|p| json!(p))
            .unwrap_or(Value::Null),
    );
    slots.insert(
        SlotKind::Wallet.key().to_string(),
        state.wallet.ready().map(|w| w.0.clone()).unwrap_or(Value::Null),
    );
    slots.insert(
        SlotKind::Sentiment.key().to_string(),
        state.sentiment.ready().map(|s| json!(s.0)).unwrap_or(Value::Null),
    );
    slots.insert(
        SlotKind::Nft.key().to_string(),
        state.nft.ready().map(|n| n.0.clone()).unwrap_or(Value::Null),
    );

    if options.show_errors {
        let errors: Map<String, Value> = state
            .failures()
            .into_iter()
            .map(|(kind, err)| (kind.key().to_string(), json!(err.to_string())))
            .collect();
        slots.insert("errors".to_string(), Value::Object(errors));
    }

    Value::Object(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::source::FetchError;
    use crate::dashboard::state::{NftData, Prediction, SentimentScore, Slot, TokenData, WalletData};

    fn full_state() -> DashboardState {
        DashboardState {
            token: Slot::Ready(TokenData(json!({ "price": 100, "volume": 5000 }))),
            prediction: Slot::Ready(Prediction::Number(101.5)),
            wallet: Slot::Ready(WalletData(json!({ "transactions": 10 }))),
            sentiment: Slot::Ready(SentimentScore(0.42)),
            nft: Slot::Ready(NftData(json!({ "name": "Example NFT" }))),
        }
    }

    #[test]
    fn test_pending_state_renders_title_only() {
        let text = render(&DashboardState::new(), &RenderOptions::default());
        assert_eq!(text, "Crypto Analysis App\n===================\n");
        assert!(sections(&DashboardState::new()).is_empty());
    }

    #[test]
    fn test_full_state_renders_all_sections_in_order() {
        let state = full_state();
        let kinds: Vec<SlotKind> = sections(&state).into_iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SlotKind::ALL.to_vec());

        let text = render(&state, &RenderOptions::default());
        let token = text.find("Token Data").unwrap();
        let prediction = text.find("Price Prediction").unwrap();
        let nft = text.find("NFT Metadata").unwrap();
        assert!(token < prediction && prediction < nft);
        assert!(text.contains("Predicted Price: 101.5"));
        assert!(text.contains("Average Sentiment: 0.42"));
        assert!(text.contains("{\n  \"price\": 100,\n  \"volume\": 5000\n}"));
    }

    #[test]
    fn test_only_sentiment_visible() {
        let state = DashboardState {
            token: Slot::Failed(FetchError::Timeout),
            prediction: Slot::Failed(FetchError::Timeout),
            wallet: Slot::Failed(FetchError::Timeout),
            sentiment: Slot::Ready(SentimentScore(0.42)),
            nft: Slot::Failed(FetchError::Timeout),
        };

        let rendered = sections(&state);
        assert_eq!(
            rendered,
            vec![Section {
                kind: SlotKind::Sentiment,
                body: "Average Sentiment: 0.42".to_string(),
            }]
        );

        let text = render(&state, &RenderOptions::default());
        assert!(!text.contains("Token Data"));
        assert!(!text.contains("Unavailable"));
    }

    #[test]
    fn test_zero_values_still_render() {
        let mut state = DashboardState::new();
        state.prediction = Slot::Ready(Prediction::Number(0.0));
        state.sentiment = Slot::Ready(SentimentScore(0.0));

        let text = render(&state, &RenderOptions::default());
        assert!(text.contains("Predicted Price: 0"));
        assert!(text.contains("Average Sentiment: 0"));
    }

    #[test]
    fn test_show_errors_lists_failures() {
        let mut state = full_state();
        state.wallet = Slot::Failed(FetchError::Http {
            status: 500,
            body: "boom".to_string(),
        });

        let options = RenderOptions {
            header: Some("Wallet: Phantom".to_string()),
            show_errors: true,
        };
        let text = render(&state, &options);
        assert!(text.contains("Wallet: Phantom\n"));
        assert!(!text.contains("Wallet Data\n"));
        assert!(text.contains("Unavailable\n-----------\nWallet Data: HTTP 500: boom"));
    }

    #[test]
    fn test_render_json() {
        let mut state = full_state();
        state.nft = Slot::Failed(FetchError::Decode("expected value".to_string()));

        let value = render_json(&state, &RenderOptions::default());
        assert_eq!(value["prediction"], json!(101.5));
        assert_eq!(value["sentiment"], json!(0.42));
        assert_eq!(value["token"]["price"], json!(100));
        assert_eq!(value["nft"], Value::Null);
        assert!(value.get("errors").is_none());

        let options = RenderOptions {
            show_errors: true,
            ..Default::default()
        };
        let value = render_json(&state, &options);
        assert_eq!(
            value["errors"]["nft"],
            json!("Malformed payload: expected value")
        );
    }
}
