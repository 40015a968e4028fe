//! Dashboard Sections
//!
//! A section renders only once its slot holds data; pending and failed slots
//! render nothing.

use leptos::*;

use crate::state::global::{pretty_json, Slot};

/// Titled card
#[component]
pub fn Section(
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            {children()}
        </section>
    }
}

/// Section showing a JSON payload verbatim
#[component]
pub fn JsonSection(
    title: &'static str,
    slot: RwSignal<Slot<serde_json::Value>>,
) -> impl IntoView {
    move || {
        slot.with(|s| s.ready().map(pretty_json)).map(|body| {
            view! {
                <Section title=title>
                    <pre class="text-sm text-gray-300 whitespace-pre-wrap">{body}</pre>
                </Section>
            }
        })
    }
}

/// Section showing a single labelled value, e.g. "Predicted Price: 104"
#[component]
pub fn ValueSection(
    title: &'static str,
    label: &'static str,
    /// Display form of the slot's value, `None` until it is ready
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        value.get().map(|value| {
            view! {
                <Section title=title>
                    <p class="text-lg">{format!("{}: {}", label, value)}</p>
                </Section>
            }
        })
    }
}

/// Display form of a ready slot
pub fn ready_text<T: std::fmt::Display>(slot: &Slot<T>) -> Option<String> {
    slot.ready().map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_text() {
        assert_eq!(ready_text(&Slot::Ready(0.0)), Some("0".to_string()));
        assert_eq!(ready_text::<f64>(&Slot::Pending), None);
        assert_eq!(ready_text::<f64>(&Slot::Failed("timeout".to_string())), None);
    }
}
