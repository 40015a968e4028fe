//! Error List Component
//!
//! Shows slots that failed to load. Entries can be dismissed and also clear
//! themselves after a few seconds.

use leptos::*;

use crate::state::global::DashboardState;

/// Error notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.errors.get().into_iter().map(|entry| {
                    let id = entry.id;
                    view! {
                        <ToastMessage
                            message=entry.message
                            on_dismiss=move |_| state.dismiss_error(id)
                        />
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastMessage<F>(
    #[prop(into)]
    message: String,
    on_dismiss: F,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    view! {
        <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg \
                    transform transition-all duration-300 ease-out animate-slide-in">
            <span class="text-lg">"✕"</span>
            <span class="text-sm font-medium">{message}</span>
            <button class="text-white/70 hover:text-white" on:click=on_dismiss>"Dismiss"</button>
        </div>
    }
}
