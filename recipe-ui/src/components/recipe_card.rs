//! Recipe Card Components
//!
//! The recipe list and its cards.

use leptos::*;
use recipe_book::view::{card_details, LIST_TITLE};
use recipe_book::{Action, Recipe};

use crate::state::UiState;

/// All recipes in the collection
#[component]
pub fn RecipeList() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");

    // Only the collection; typing in the form must not re-render the cards
    let recipes = create_memo(move |_| state.recipes.with(|s| s.recipes.clone()));

    view! {
        <div>
            <h2 class="text-2xl font-semibold mb-4">{LIST_TITLE}</h2>
            <div class="space-y-4">
                {move || {
                    recipes
                        .get()
                        .into_iter()
                        .map(|recipe| view! { <RecipeCard recipe=recipe /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");

    let id = recipe.id.clone();
    let selected = recipe.clone();

    view! {
        <div class="bg-gray-800 rounded-lg overflow-hidden border border-gray-700">
            <img src=recipe.image.clone() alt=recipe.name.clone() class="w-full h-36 object-cover" />
            <div class="p-4 space-y-1">
                <h3 class="text-lg font-semibold">{recipe.name.clone()}</h3>
                {card_details(&recipe)
                    .into_iter()
                    .map(|line| view! { <p class="text-sm text-gray-400">{line}</p> })
                    .collect_view()}

                <div class="flex space-x-2 pt-2">
                    <button
                        on:click=move |_| state.dispatch(Action::Select(selected.clone()))
                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
                    >
                        "✎ Edit"
                    </button>
                    <button
                        on:click=move |_| state.delete(id.clone())
                        class="px-3 py-1 bg-red-700 hover:bg-red-600 rounded text-sm transition-colors"
                    >
                        "🗑 Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
