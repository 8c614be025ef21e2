//! Text rendering of the recipe manager view
//!
//! The strings here are shared by the terminal form and the web frontend so
//! both show a recipe the same way.

use crate::model::{format_rating, FormField, Recipe};
use crate::store::{EditMode, RecipeState};

pub const PAGE_TITLE: &str = "Food Recipes";
pub const LIST_TITLE: &str = "Recipes List";

/// Placeholder for a list field the store did not send as a sequence
const NOT_AVAILABLE: &str = "N/A";

/// Heading of the form card
pub fn form_title(mode: &EditMode) -> &'static str {
    if mode.is_editing() {
        "Edit Recipe"
    } else {
        "Add Recipe"
    }
}

/// Label of the form's submit button
pub fn submit_label(mode: &EditMode) -> &'static str {
    if mode.is_editing() {
        "Update Recipe"
    } else {
        "Add Recipe"
    }
}

fn joined(items: &Option<Vec<String>>) -> String {
    match items {
        Some(items) => items.join(", "),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// The detail lines of a recipe card, below its name
pub fn card_details(recipe: &Recipe) -> Vec<String> {
    vec![
        format!("Time: {}", recipe.time),
        format!("Rating: {}", format_rating(recipe.rating)),
        format!("Category: {}", recipe.category),
        format!("Description: {}", recipe.description),
        format!("Ingredients: {}", joined(&recipe.ingredients)),
        format!("Method: {}", joined(&recipe.method)),
    ]
}

/// A full card as plain text
pub fn render_card(recipe: &Recipe) -> String {
    let mut out = format!("[{}] {}\n", recipe.id, recipe.name);
    if !recipe.image.is_empty() {
        out.push_str(&format!("  Image: {}\n", recipe.image));
    }
    for line in card_details(recipe) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// The recipe list as plain text
pub fn render_list(recipes: &[Recipe]) -> String {
    let mut out = format!("{}\n{}\n", LIST_TITLE, "-".repeat(LIST_TITLE.len()));
    if recipes.is_empty() {
        out.push_str("No recipes yet.\n");
    }
    for recipe in recipes {
        out.push_str(&render_card(recipe));
        out.push('\n');
    }
    out
}

/// The form with its current values as plain text
pub fn render_form(state: &RecipeState) -> String {
    let title = form_title(&state.mode);
    let mut out = format!("{}\n{}\n", title, "-".repeat(title.len()));
    let width = FormField::all()
        .iter()
        .map(|f| f.label().len())
        .max()
        .unwrap_or(0);

    for field in FormField::all() {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            field.label(),
            state.draft.get(*field),
            width = width
        ));
    }
    out.push_str(&format!("  [{}]\n", submit_label(&state.mode)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeId;
    use crate::store::{reduce, Action};

    #[test]
    fn test_card_shows_joined_ingredients() {
        let recipes: Vec<Recipe> = serde_json::from_str(
            r#"[{"id": 1, "name": "Soup", "ingredients": ["salt", "water"], "method": ["boil", "serve"]}]"#,
        )
        .unwrap();
        let state = reduce(RecipeState::default(), Action::Fetched(recipes));

        let list = render_list(&state.recipes);
        assert_eq!(list.matches("[1] Soup").count(), 1);
        assert!(list.contains("Ingredients: salt, water"));
        assert!(list.contains("Method: boil, serve"));
    }

    #[test]
    fn test_card_without_sequences_shows_na() {
        let mut recipe = Recipe::new(3, "Bread");
        recipe.ingredients = None;
        recipe.method = None;

        let lines = card_details(&recipe);
        assert!(lines.contains(&"Ingredients: N/A".to_string()));
        assert!(lines.contains(&"Method: N/A".to_string()));
    }

    #[test]
    fn test_card_rating_format() {
        let recipe = Recipe::new(1, "Soup").rating(4.0);
        assert!(card_details(&recipe).contains(&"Rating: 4".to_string()));
    }

    #[test]
    fn test_titles_follow_mode() {
        let adding = EditMode::Adding;
        let editing = EditMode::Editing(RecipeId::Number(2));

        assert_eq!(form_title(&adding), "Add Recipe");
        assert_eq!(submit_label(&adding), "Add Recipe");
        assert_eq!(form_title(&editing), "Edit Recipe");
        assert_eq!(submit_label(&editing), "Update Recipe");
    }

    #[test]
    fn test_form_shows_draft_values() {
        let state = reduce(
            RecipeState::default(),
            Action::Select(Recipe::new(2, "Tea").ingredients(["water", "leaves"])),
        );
        let form = render_form(&state);

        assert!(form.starts_with("Edit Recipe"));
        assert!(form.contains("water, leaves"));
        assert!(form.contains("[Update Recipe]"));
    }

    #[test]
    fn test_empty_list() {
        assert!(render_list(&[]).contains("No recipes yet."));
    }
}
