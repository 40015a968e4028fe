//! Dashboard State
//!
//! Reactive state management using Leptos signals. Each backend result lives
//! in its own slot signal so one section can appear without waiting on the
//! others.

use leptos::*;
use std::fmt;

/// Maximum number of failures kept in the error list
const MAX_ERRORS: usize = 10;

/// How long an error stays listed unless dismissed first
const ERROR_DISMISS_MS: u32 = 8000;

/// One backend result: still loading, loaded, or failed with a message
#[derive(Clone, Debug, PartialEq)]
pub enum Slot<T> {
    Pending,
    Ready(T),
    Failed(String),
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

    pub fn ready(&self) -> Option<&T> {
        match self {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Slot::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, String>> for Slot<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Slot::Ready(value),
            Err(message) => Slot::Failed(message),
        }
    }
}

/// Predicted next price, numeric or a label from the model
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    Number(f64),
    Text(String),
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Number(n) => write!(f, "{}", n),
            Prediction::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Load generations: each reload starts a new one, and only responses
/// belonging to the current one may write to the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadTracker {
    current: u64,
}

impl LoadTracker {
    /// Start a new load, retiring the previous one
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }
}

/// One entry in the error list
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorEntry {
    pub id: u64,
    pub message: String,
}

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub token: RwSignal<Slot<serde_json::Value>>,
    pub prediction: RwSignal<Slot<Prediction>>,
    pub wallet: RwSignal<Slot<serde_json::Value>>,
    pub sentiment: RwSignal<Slot<f64>>,
    pub nft: RwSignal<Slot<serde_json::Value>>,
    /// When the current load started (epoch millis)
    pub loaded_at: RwSignal<Option<i64>>,
    /// Failures shown in the dismissable error list
    pub errors: RwSignal<Vec<ErrorEntry>>,
    loads: StoredValue<LoadTracker>,
    next_error_id: StoredValue<u64>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState {
        token: create_rw_signal(Slot::Pending),
        prediction: create_rw_signal(Slot::Pending),
        wallet: create_rw_signal(Slot::Pending),
        sentiment: create_rw_signal(Slot::Pending),
        nft: create_rw_signal(Slot::Pending),
        loaded_at: create_rw_signal(None),
        errors: create_rw_signal(Vec::new()),
        loads: store_value(LoadTracker::default()),
        next_error_id: store_value(0),
    };

    provide_context(state);
    state
}

impl DashboardState {
    /// Put every slot back to pending before a fresh load. Returns the new
    /// load generation; responses from earlier loads are ignored from now on.
    pub fn reset(&self) -> u64 {
        let mut generation = 0;
        self.loads.update_value(|loads| generation = loads.begin());

        self.token.set(Slot::Pending);
        self.prediction.set(Slot::Pending);
        self.wallet.set(Slot::Pending);
        self.sentiment.set(Slot::Pending);
        self.nft.set(Slot::Pending);
        self.errors.set(Vec::new());
        self.loaded_at.set(Some(chrono::Utc::now().timestamp_millis()));

        generation
    }

    /// Whether a response from `generation` may still write to the page.
    /// False once a newer load has started or the page is gone.
    pub fn is_current(&self, generation: u64) -> bool {
        self.loads
            .try_with_value(|loads| loads.is_current(generation))
            .unwrap_or(false)
    }

    /// Number of slots still waiting on a response
    pub fn pending_count(&self) -> usize {
        [
            self.token.with(Slot::is_pending),
            self.prediction.with(Slot::is_pending),
            self.wallet.with(Slot::is_pending),
            self.sentiment.with(Slot::is_pending),
            self.nft.with(Slot::is_pending),
        ]
        .into_iter()
        .filter(|pending| *pending)
        .count()
    }

    /// Add a failure to the error list; it dismisses itself after a while
    pub fn push_error(&self, message: String) {
        let mut id = 0;
        self.next_error_id.update_value(|next| {
            *next += 1;
            id = *next;
        });
        if self
            .errors
            .try_update(|errors| push_bounded(errors, ErrorEntry { id, message }))
            .is_none()
        {
            return;
        }

        let state = *self;
        gloo_timers::callback::Timeout::new(ERROR_DISMISS_MS, move || {
            state.dismiss_error(id);
        })
        .forget();
    }

    /// Remove one entry from the error list
    pub fn dismiss_error(&self, id: u64) {
        let _ = self.errors.try_update(|errors| remove_entry(errors, id));
    }
}

fn push_bounded(errors: &mut Vec<ErrorEntry>, entry: ErrorEntry) {
    errors.push(entry);
    if errors.len() > MAX_ERRORS {
        errors.remove(0);
    }
}

fn remove_entry(errors: &mut Vec<ErrorEntry>, id: u64) {
    errors.retain(|entry| entry.id != id);
}

/// Pretty-print a JSON payload for display
pub fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_default_is_pending() {
        let slot: Slot<f64> = Slot::default();
        assert!(slot.is_pending());
        assert_eq!(slot.ready(), None);
    }

    #[test]
    fn test_slot_from_result() {
        let ok: Slot<f64> = Ok(0.0).into();
        assert_eq!(ok.ready(), Some(&0.0));

        let failed: Slot<f64> = Err("HTTP 500: boom".to_string()).into();
        assert_eq!(failed.error(), Some("HTTP 500: boom"));
        assert!(!failed.is_pending());
    }

    #[test]
    fn test_prediction_display() {
        let number: Prediction = serde_json::from_str("104.5").unwrap();
        assert_eq!(number.to_string(), "104.5");

        let text: Prediction = serde_json::from_str("\"bullish\"").unwrap();
        assert_eq!(text.to_string(), "bullish");
    }

    fn entry(id: u64) -> ErrorEntry {
        ErrorEntry {
            id,
            message: format!("error {}", id),
        }
    }

    #[test]
    fn test_error_list_is_bounded() {
        let mut errors = Vec::new();
        for id in 0..(MAX_ERRORS as u64 + 2) {
            push_bounded(&mut errors, entry(id));
        }
        assert_eq!(errors.len(), MAX_ERRORS);
        assert_eq!(errors[0].message, "error 2");
    }

    #[test]
    fn test_dismiss_removes_only_that_entry() {
        let mut errors = vec![entry(1), entry(2), entry(3)];
        remove_entry(&mut errors, 2);
        assert_eq!(errors, vec![entry(1), entry(3)]);

        // Already gone (dismissed by hand before the timer fired)
        remove_entry(&mut errors, 2);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_reload_retires_earlier_generation() {
        let mut loads = LoadTracker::default();
        let first = loads.begin();
        assert!(loads.is_current(first));

        // Saving new targets starts a second load while the first is in flight
        let second = loads.begin();
        assert!(!loads.is_current(first));
        assert!(loads.is_current(second));

        // A late response from the first load must not be applied
        let mut slot: Slot<&str> = Slot::Pending;
        for (generation, value) in [(second, "address B"), (first, "address A")] {
            if loads.is_current(generation) {
                slot = Slot::Ready(value);
            }
        }
        assert_eq!(slot, Slot::Ready("address B"));
    }

    #[test]
    fn test_pretty_json() {
        let value = serde_json::json!({ "price": 100 });
        assert_eq!(pretty_json(&value), "{\n  \"price\": 100\n}");
    }
}
