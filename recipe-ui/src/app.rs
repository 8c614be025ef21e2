//! App Root Component
//!
//! Page layout and state provider.

use leptos::*;
use recipe_book::view::PAGE_TITLE;

use crate::components::{RecipeForm, RecipeList, ServiceSettings, Toast};
use crate::state::provide_ui_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_ui_state();

    // Fetch the collection once on page load
    state.load();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <h1 class="text-4xl font-bold mb-6">{PAGE_TITLE}</h1>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <RecipeForm />
                    <RecipeList />
                </div>
            </main>

            <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
                <div class="container mx-auto">
                    <ServiceSettings />
                </div>
            </footer>

            <Toast />
        </div>
    }
}
