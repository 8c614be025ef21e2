//! Page State
//!
//! Reactive wrapper around `RecipeState`. Remote calls are spawned on the
//! browser event loop and only feed the reducer when they succeed; a failed
//! call leaves the page as it was and shows an error toast.

use leptos::*;
use recipe_book::{reduce, Action, ApiError, EditMode, RecipeApi, RecipeId, RecipeState};

use crate::api::HttpRecipeApi;

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct UiState {
    /// Collection, draft and edit selection
    pub recipes: RwSignal<RecipeState>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide page state to the component tree
pub fn provide_ui_state() -> UiState {
    let state = UiState {
        recipes: create_rw_signal(RecipeState::default()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
    state
}

impl UiState {
    /// Apply one reducer action
    pub fn dispatch(&self, action: Action) {
        self.recipes.update(|state| {
            *state = reduce(std::mem::take(state), action);
        });
    }

    /// Replace the collection with the remote one
    pub fn load(&self) {
        let state = *self;
        spawn_local(async move {
            match HttpRecipeApi::from_storage().list_recipes().await {
                Ok(recipes) => state.dispatch(Action::Fetched(recipes)),
                Err(e) => state.report("Failed to fetch recipes", &e),
            }
        });
    }

    /// The form's submit button: update in edit mode, create otherwise
    pub fn submit(&self) {
        let state = *self;
        let (mode, payload) = self
            .recipes
            .with_untracked(|s| (s.mode.clone(), s.draft.to_payload()));

        spawn_local(async move {
            let api = HttpRecipeApi::from_storage();
            match mode {
                EditMode::Editing(id) => match api.update_recipe(&id, &payload).await {
                    Ok(recipe) => {
                        state.show_success(&format!("Updated {}", recipe.name));
                        state.dispatch(Action::Updated { id, recipe });
                    }
                    Err(e) => state.report("Failed to update recipe", &e),
                },
                EditMode::Adding => match api.create_recipe(&payload).await {
                    Ok(recipe) => {
                        state.show_success(&format!("Added {}", recipe.name));
                        state.dispatch(Action::Created(recipe));
                    }
                    Err(e) => state.report("Failed to add recipe", &e),
                },
            }
        });
    }

    /// Delete a recipe from the remote store
    pub fn delete(&self, id: RecipeId) {
        let state = *self;
        spawn_local(async move {
            match HttpRecipeApi::from_storage().delete_recipe(&id).await {
                Ok(()) => state.dispatch(Action::Deleted(id)),
                Err(e) => state.report("Failed to delete recipe", &e),
            }
        });
    }

    fn report(&self, context: &str, error: &ApiError) {
        let message = format!("{}: {}", context, error);
        web_sys::console::error_1(&message.clone().into());
        self.show_error(&message);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
