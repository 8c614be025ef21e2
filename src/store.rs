//! Recipe State Container
//!
//! Holds the collection, the draft and the edit selection. Every change goes
//! through [`reduce`], a pure function from the prior state and an action to
//! the next state, so the form logic can be exercised without any rendering
//! layer or network.
//!
//! ```text
//!            select(recipe)
//!   Adding ─────────────────▶ Editing(id) ──┐ select(other)
//!     ▲                           │  ◀──────┘
//!     └───── update succeeded ────┘
//! ```

use crate::model::{Draft, FormField, Recipe, RecipeId};

/// Whether the form adds a new recipe or edits an existing one
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditMode {
    #[default]
    Adding,
    Editing(RecipeId),
}

impl EditMode {
    /// Id of the recipe being edited, if any
    pub fn selection(&self) -> Option<&RecipeId> {
        match self {
            EditMode::Adding => None,
            EditMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing(_))
    }
}

/// State of the recipe manager view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeState {
    /// Mirror of the remote collection
    pub recipes: Vec<Recipe>,
    /// Values bound to the form
    pub draft: Draft,
    pub mode: EditMode,
}

/// Transitions of the recipe state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A list fetch succeeded
    Fetched(Vec<Recipe>),
    /// A create succeeded with the server's representation
    Created(Recipe),
    /// An update of `id` succeeded with the server's representation
    Updated { id: RecipeId, recipe: Recipe },
    /// A delete of the given id succeeded
    Deleted(RecipeId),
    /// The edit action of a list entry was invoked
    Select(Recipe),
    /// One form input changed
    Edit(FormField, String),
}

/// Compute the next state
pub fn reduce(mut state: RecipeState, action: Action) -> RecipeState {
    match action {
        Action::Fetched(recipes) => {
            state.recipes = recipes;
        }
        Action::Created(recipe) => {
            state.recipes.push(recipe);
            state.draft = Draft::default();
        }
        Action::Updated { id, recipe } => {
            for existing in state.recipes.iter_mut().filter(|r| r.id == id) {
                *existing = recipe.clone();
            }
            state.mode = EditMode::Adding;
            state.draft = Draft::default();
        }
        Action::Deleted(id) => {
            state.recipes.retain(|r| r.id != id);
        }
        Action::Select(recipe) => {
            state.draft = Draft::from_recipe(&recipe);
            state.mode = EditMode::Editing(recipe.id);
        }
        Action::Edit(field, value) => {
            state.draft.set(field, value);
        }
    }
    state
}

impl RecipeState {
    /// Apply an action in place
    pub fn apply(&mut self, action: Action) {
        *self = reduce(std::mem::take(self), action);
    }

    /// Find a recipe in the collection
    pub fn find(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListField;

    fn soup() -> Recipe {
        Recipe::new(1, "Soup")
            .ingredients(["salt", "water"])
            .method(["boil", "serve"])
    }

    fn tea() -> Recipe {
        Recipe::new(2, "Tea").ingredients(["water", "leaves"])
    }

    fn with(recipes: Vec<Recipe>) -> RecipeState {
        reduce(RecipeState::default(), Action::Fetched(recipes))
    }

    #[test]
    fn test_initial_state_is_adding() {
        let state = RecipeState::default();
        assert_eq!(state.mode, EditMode::Adding);
        assert_eq!(state.draft, Draft::default());
        assert!(state.recipes.is_empty());
    }

    #[test]
    fn test_fetch_replaces_collection() {
        let state = with(vec![soup(), tea()]);
        let state = reduce(state, Action::Fetched(vec![tea()]));
        assert_eq!(state.recipes, vec![tea()]);
    }

    #[test]
    fn test_create_appends_once_and_resets_draft() {
        let mut state = with(vec![soup()]);
        state.apply(Action::Edit(FormField::Name, "Tea".to_string()));
        state.apply(Action::Created(tea()));

        assert_eq!(state.recipes, vec![soup(), tea()]);
        assert_eq!(state.draft, Draft::default());
        assert_eq!(state.mode, EditMode::Adding);
    }

    #[test]
    fn test_update_replaces_only_matching_and_clears_selection() {
        let mut state = with(vec![soup(), tea()]);
        state.apply(Action::Select(tea()));
        assert_eq!(state.mode, EditMode::Editing(RecipeId::Number(2)));

        let renamed = Recipe::new(2, "Green tea").ingredients(["water", "matcha"]);
        state.apply(Action::Updated {
            id: RecipeId::Number(2),
            recipe: renamed.clone(),
        });

        assert_eq!(state.recipes, vec![soup(), renamed]);
        assert_eq!(state.mode, EditMode::Adding);
        assert_eq!(state.draft, Draft::default());
    }

    #[test]
    fn test_update_of_missing_id_leaves_collection() {
        let mut state = with(vec![soup()]);
        state.apply(Action::Select(tea()));
        state.apply(Action::Updated {
            id: RecipeId::Number(2),
            recipe: tea(),
        });

        assert_eq!(state.recipes, vec![soup()]);
        assert_eq!(state.mode, EditMode::Adding);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let state = with(vec![soup(), tea()]);
        let state = reduce(state, Action::Deleted(RecipeId::Number(2)));
        assert_eq!(state.recipes, vec![soup()]);
    }

    #[test]
    fn test_delete_keeps_selection() {
        let mut state = with(vec![soup(), tea()]);
        state.apply(Action::Select(tea()));
        state.apply(Action::Deleted(RecipeId::Number(2)));

        assert_eq!(state.mode, EditMode::Editing(RecipeId::Number(2)));
        assert_eq!(state.recipes.len(), 1);
    }

    #[test]
    fn test_select_populates_display_strings() {
        let mut state = with(vec![soup(), tea()]);
        state.apply(Action::Select(tea()));

        assert_eq!(
            state.draft.ingredients,
            ListField::Display("water, leaves".to_string())
        );
        assert_eq!(state.draft.name, "Tea");
    }

    #[test]
    fn test_reselect_switches_record() {
        let mut state = with(vec![soup(), tea()]);
        state.apply(Action::Select(tea()));
        state.apply(Action::Select(soup()));

        assert_eq!(state.mode.selection(), Some(&RecipeId::Number(1)));
        assert_eq!(state.draft.method.display(), "boil, serve");
    }

    #[test]
    fn test_edit_sets_single_field() {
        let mut state = RecipeState::default();
        state.apply(Action::Edit(FormField::Author, "Ann".to_string()));

        assert_eq!(state.draft.author, "Ann");
        assert_eq!(state.draft.name, "");
    }
}
