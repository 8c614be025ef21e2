//! Recipe Manager
//!
//! Couples a [`RecipeState`] with a [`RecipeApi`] transport. Each operation
//! awaits the remote call and only feeds the reducer when it succeeded; on
//! failure the state is left exactly as it was and the error is returned to
//! the caller, who decides whether the user gets to see it.

use thiserror::Error;

use crate::api::{ApiError, RecipeApi};
use crate::model::{FormField, Recipe, RecipeId};
use crate::store::{reduce, Action, EditMode, RecipeState};

/// Errors from recipe manager operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ManagerError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result type for manager operations
pub type ManagerResult<T> = Result<T, ManagerError>;

/// What a form submission did
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Created(Recipe),
    Updated(Recipe),
}

/// The recipe manager session
pub struct RecipeManager<A> {
    api: A,
    state: RecipeState,
}

impl<A: RecipeApi> RecipeManager<A> {
    /// Create a manager with an empty collection in add mode
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RecipeState::default(),
        }
    }

    pub fn state(&self) -> &RecipeState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.state.recipes
    }

    pub fn mode(&self) -> &EditMode {
        &self.state.mode
    }

    fn dispatch(&mut self, action: Action) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    /// Replace the collection with the remote one
    pub async fn list(&mut self) -> ManagerResult<usize> {
        match self.api.list_recipes().await {
            Ok(recipes) => {
                let count = recipes.len();
                tracing::debug!(?recipes, "Fetched recipes");
                self.dispatch(Action::Fetched(recipes));
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch recipes");
                Err(e.into())
            }
        }
    }

    /// Send the current draft as a new recipe
    pub async fn create(&mut self) -> ManagerResult<Recipe> {
        let payload = self.state.draft.to_payload();
        match self.api.create_recipe(&payload).await {
            Ok(recipe) => {
                tracing::info!(id = %recipe.id, name = %recipe.name, "Recipe created");
                self.dispatch(Action::Created(recipe.clone()));
                Ok(recipe)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create recipe");
                Err(e.into())
            }
        }
    }

    /// Send the current draft as the new version of `id`
    pub async fn update(&mut self, id: &RecipeId) -> ManagerResult<Recipe> {
        let payload = self.state.draft.to_payload();
        match self.api.update_recipe(id, &payload).await {
            Ok(recipe) => {
                tracing::info!(%id, name = %recipe.name, "Recipe updated");
                self.dispatch(Action::Updated {
                    id: id.clone(),
                    recipe: recipe.clone(),
                });
                Ok(recipe)
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to update recipe");
                Err(e.into())
            }
        }
    }

    /// Remove `id` from the remote store
    pub async fn delete(&mut self, id: &RecipeId) -> ManagerResult<()> {
        match self.api.delete_recipe(id).await {
            Ok(()) => {
                tracing::info!(%id, "Recipe deleted");
                self.dispatch(Action::Deleted(id.clone()));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to delete recipe");
                Err(e.into())
            }
        }
    }

    /// The form's submit button: update in edit mode, create otherwise
    pub async fn submit(&mut self) -> ManagerResult<Submitted> {
        match self.state.mode.clone() {
            EditMode::Editing(id) => self.update(&id).await.map(Submitted::Updated),
            EditMode::Adding => self.create().await.map(Submitted::Created),
        }
    }

    /// Enter edit mode for a recipe in the collection
    ///
    /// Returns `None` and changes nothing when no such recipe is listed.
    pub fn select(&mut self, id: &RecipeId) -> Option<&Recipe> {
        let recipe = self.state.find(id)?.clone();
        self.dispatch(Action::Select(recipe));
        self.state.find(id)
    }

    /// Change one form input
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.dispatch(Action::Edit(field, value.into()));
    }
}
