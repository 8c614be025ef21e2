//! Service Settings Component
//!
//! Points the page at another recipe service.

use leptos::*;

use crate::api;
use crate::state::UiState;

#[component]
pub fn ServiceSettings() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save = move |_| {
        api::set_api_base(&api_url.get());
        state.show_success("Service URL saved");
        state.load();
    };

    view! {
        <div class="flex items-center space-x-2 text-sm">
            <span class="text-gray-400">"Service"</span>
            <input
                type="url"
                prop:value=move || api_url.get()
                on:input=move |ev| set_api_url.set(event_target_value(&ev))
                class="bg-gray-700 rounded px-3 py-1 w-72
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="button"
                on:click=save
                class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded transition-colors"
            >
                "Save"
            </button>
        </div>
    }
}
