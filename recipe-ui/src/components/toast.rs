//! Toast Component
//!
//! Outcome of the last remote call: a green notice after an add or update,
//! a red one when a call failed.

use leptos::*;

use crate::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Saved,
    Failed,
}

impl Outcome {
    fn heading(self) -> &'static str {
        match self {
            Outcome::Saved => "Recipe saved",
            Outcome::Failed => "Recipe service error",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Outcome::Saved => "border-l-4 border-green-400 bg-green-700",
            Outcome::Failed => "border-l-4 border-red-400 bg-red-700",
        }
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");

    let notices = move || {
        [
            (Outcome::Saved, state.success.get()),
            (Outcome::Failed, state.error.get()),
        ]
        .into_iter()
        .filter_map(|(outcome, message)| message.map(|m| (outcome, m)))
        .map(|(outcome, message)| {
            view! {
                <div class=format!("{} text-white px-4 py-2 rounded shadow-lg", outcome.class())>
                    <p class="text-xs uppercase tracking-wide opacity-80">{outcome.heading()}</p>
                    <p class="text-sm">{message}</p>
                </div>
            }
        })
        .collect_view()
    };

    view! { <div class="fixed bottom-16 right-4 z-50 w-80 space-y-2">{notices}</div> }
}
