//! Dashboard State
//!
//! One slot per data category. Each slot is written by exactly one fetch and
//! records either the payload or the reason it is missing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::source::FetchError;

/// The five independently loaded data categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Token,
    Prediction,
    Wallet,
    Sentiment,
    Nft,
}

impl SlotKind {
    /// All slots in render order
    pub const ALL: [SlotKind; 5] = [
        SlotKind::Token,
        SlotKind::Prediction,
        SlotKind::Wallet,
        SlotKind::Sentiment,
        SlotKind::Nft,
    ];

    /// Key used in JSON output
    pub fn key(&self) -> &'static str {
        match self {
            SlotKind::Token => "token",
            SlotKind::Prediction => "prediction",
            SlotKind::Wallet => "wallet",
            SlotKind::Sentiment => "sentiment",
            SlotKind::Nft => "nft",
        }
    }

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            SlotKind::Token => "Token Data",
            SlotKind::Prediction => "Price Prediction",
            SlotKind::Wallet => "Wallet Data",
            SlotKind::Sentiment => "Sentiment Analysis",
            SlotKind::Nft => "NFT Metadata",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Token metadata as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenData(pub Value);

/// Wallet metadata as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletData(pub Value);

/// NFT metadata as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NftData(pub Value);

/// Forecast value from the prediction endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    Number(f64),
    Text(String),
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Number(n) => write!(f, "{}", n),
            Prediction::Text(s) => f.write_str(s),
        }
    }
}

/// Average sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentScore(pub f64);

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Load state of a single slot
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    /// Request issued, no answer yet
    Pending,
    /// Payload received
    Ready(T),
    /// Request failed; the section stays hidden
    Failed(FetchError),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Pending
    }
}

impl<T> Slot<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Slot::Ready(_))
    }

    /// The payload, if the slot loaded
    pub fn ready(&self) -> Option<&T> {
        match self {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if the slot failed
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Slot::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for Slot<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Slot::Ready(value),
            Err(err) => Slot::Failed(err),
        }
    }
}

/// Display state for one mount of the dashboard
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub token: Slot<TokenData>,
    pub prediction: Slot<Prediction>,
    pub wallet: Slot<WalletData>,
    pub sentiment: Slot<SentimentScore>,
    pub nft: Slot<NftData>,
}

impl DashboardState {
    /// Fresh state with every slot pending
    pub fn new() -> Self {
        Self::default()
    }

    fn flags(&self) -> [(SlotKind, bool, Option<&FetchError>); 5] {
        [
            (SlotKind::Token, self.token.is_pending(), self.token.error()),
            (SlotKind::Prediction, self.prediction.is_pending(), self.prediction.error()),
            (SlotKind::Wallet, self.wallet.is_pending(), self.wallet.error()),
            (SlotKind::Sentiment, self.sentiment.is_pending(), self.sentiment.error()),
            (SlotKind::Nft, self.nft.is_pending(), self.nft.error()),
        ]
    }

    /// True once no slot is waiting on a response
    pub fn is_settled(&self) -> bool {
        self.pending_count() == 0
    }

    pub fn pending_count(&self) -> usize {
        self.flags().iter().filter(|(_, pending, _)| *pending).count()
    }

    /// Slots that loaded, in render order
    pub fn ready_slots(&self) -> Vec<SlotKind> {
        self.flags()
            .iter()
            .filter(|(_, pending, err)| !*pending && err.is_none())
            .map(|(kind, _, _)| *kind)
            .collect()
    }

    /// Slots that failed, with their errors
    pub fn failures(&self) -> Vec<(SlotKind, &FetchError)> {
        self.flags()
            .into_iter()
            .filter_map(|(kind, _, err)| err.map(|e| (kind, e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_state_is_all_pending() {
        let state = DashboardState::new();
        assert_eq!(state.pending_count(), 5);
        assert!(!state.is_settled());
        assert!(state.ready_slots().is_empty());
        assert!(state.failures().is_empty());
    }

    #[test]
    fn test_settled_with_mixed_outcomes() {
        let mut state = DashboardState::new();
        state.token = Slot::Ready(TokenData(json!({"price": 100})));
        state.prediction = Slot::Failed(FetchError::Timeout);
        state.wallet = Slot::Ready(WalletData(json!({})));
        state.sentiment = Slot::Ready(SentimentScore(0.0));
        state.nft = Slot::Failed(FetchError::Unconfigured { slot: SlotKind::Nft });

        assert!(state.is_settled());
        assert_eq!(
            state.ready_slots(),
            vec![SlotKind::Token, SlotKind::Wallet, SlotKind::Sentiment]
        );

        let failed: Vec<SlotKind> = state.failures().into_iter().map(|(k, _)| k).collect();
        assert_eq!(failed, vec![SlotKind::Prediction, SlotKind::Nft]);
    }

    #[test]
    fn test_prediction_accepts_number_or_string() {
        let n: Prediction = serde_json::from_value(json!(101.5)).unwrap();
        assert_eq!(n, Prediction::Number(101.5));
        assert_eq!(n.to_string(), "101.5");

        let s: Prediction = serde_json::from_value(json!("up")).unwrap();
        assert_eq!(s, Prediction::Text("up".to_string()));
        assert_eq!(s.to_string(), "up");

        assert!(serde_json::from_value::<Prediction>(json!(null)).is_err());
    }

    #[test]
    fn test_slot_from_result() {
        let ok: Slot<SentimentScore> = Ok(SentimentScore(0.42)).into();
        assert_eq!(ok.ready(), Some(&SentimentScore(0.42)));

        let err: Slot<SentimentScore> = Err(FetchError::Timeout).into();
        assert_eq!(err.error(), Some(&FetchError::Timeout));
        assert!(!err.is_ready());
    }
}
