//! Form draft
//!
//! The draft is what the form is bound to. Ingredients and method are edited
//! as one comma-separated line each and only turned into sequences when the
//! draft is submitted.

use serde::Serialize;

use super::recipe::{format_rating, Recipe};

/// Separator used when flattening a sequence for display
const DISPLAY_SEPARATOR: &str = ", ";

/// A list-valued form field
///
/// `Display` is the comma-joined text the user edits, `Canonical` the
/// sequence the remote store persists. Splitting is lossy when an element
/// contains a comma itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ListField {
    Display(String),
    Canonical(Vec<String>),
}

impl Default for ListField {
    fn default() -> Self {
        ListField::Display(String::new())
    }
}

impl ListField {
    /// Flatten a sequence into its display form
    pub fn display_of(items: &[String]) -> Self {
        ListField::Display(items.join(DISPLAY_SEPARATOR))
    }

    /// Text shown in the form input
    pub fn display(&self) -> String {
        match self {
            ListField::Display(text) => text.clone(),
            ListField::Canonical(items) => items.join(DISPLAY_SEPARATOR),
        }
    }

    /// Expand display text into a sequence; canonical values pass through
    pub fn normalize(self) -> Self {
        ListField::Canonical(self.into_sequence())
    }

    /// The sequence sent to the remote store
    pub fn into_sequence(self) -> Vec<String> {
        match self {
            ListField::Display(text) => text.split(',').map(|item| item.trim().to_string()).collect(),
            ListField::Canonical(items) => items,
        }
    }
}

/// Inputs of the recipe form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Image,
    Time,
    Rating,
    Category,
    Url,
    Review,
    Author,
    Description,
    Ingredients,
    Method,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Image,
            FormField::Time,
            FormField::Rating,
            FormField::Category,
            FormField::Url,
            FormField::Review,
            FormField::Author,
            FormField::Description,
            FormField::Ingredients,
            FormField::Method,
        ]
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Image => "Image URL",
            FormField::Time => "Time",
            FormField::Rating => "Rating",
            FormField::Category => "Category",
            FormField::Url => "Recipe URL",
            FormField::Review => "Review",
            FormField::Author => "Author",
            FormField::Description => "Description",
            FormField::Ingredients => "Ingredients (comma-separated)",
            FormField::Method => "Method (comma-separated)",
        }
    }

    /// Wire and input name of the field
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Image => "image",
            FormField::Time => "time",
            FormField::Rating => "rating",
            FormField::Category => "category",
            FormField::Url => "url",
            FormField::Review => "review",
            FormField::Author => "author",
            FormField::Description => "description",
            FormField::Ingredients => "ingredients",
            FormField::Method => "method",
        }
    }

    /// Look a field up by its key
    pub fn from_key(key: &str) -> Option<FormField> {
        FormField::all()
            .iter()
            .copied()
            .find(|field| field.key().eq_ignore_ascii_case(key.trim()))
    }
}

/// The in-progress values bound to the form
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub image: String,
    pub time: String,
    /// Raw rating text, exactly as typed
    pub rating: String,
    pub category: String,
    pub url: String,
    pub review: String,
    pub author: String,
    pub description: String,
    pub ingredients: ListField,
    pub method: ListField,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: String::new(),
            time: String::new(),
            rating: "0".to_string(),
            category: String::new(),
            url: String::new(),
            review: String::new(),
            author: String::new(),
            description: String::new(),
            ingredients: ListField::default(),
            method: ListField::default(),
        }
    }
}

impl Draft {
    /// Populate a draft for editing an existing recipe
    ///
    /// Sequences are flattened for display; a record without a sequence
    /// yields an empty input.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let flatten = |items: &Option<Vec<String>>| match items {
            Some(items) => ListField::display_of(items),
            None => ListField::default(),
        };

        Self {
            name: recipe.name.clone(),
            image: recipe.image.clone(),
            time: recipe.time.clone(),
            rating: format_rating(recipe.rating),
            category: recipe.category.clone(),
            url: recipe.url.clone(),
            review: recipe.review.clone(),
            author: recipe.author.clone(),
            description: recipe.description.clone(),
            ingredients: flatten(&recipe.ingredients),
            method: flatten(&recipe.method),
        }
    }

    /// Set one field from raw input text
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Image => self.image = value,
            FormField::Time => self.time = value,
            FormField::Rating => self.rating = value,
            FormField::Category => self.category = value,
            FormField::Url => self.url = value,
            FormField::Review => self.review = value,
            FormField::Author => self.author = value,
            FormField::Description => self.description = value,
            FormField::Ingredients => self.ingredients = ListField::Display(value),
            FormField::Method => self.method = ListField::Display(value),
        }
    }

    /// Current input text of one field
    pub fn get(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Image => self.image.clone(),
            FormField::Time => self.time.clone(),
            FormField::Rating => self.rating.clone(),
            FormField::Category => self.category.clone(),
            FormField::Url => self.url.clone(),
            FormField::Review => self.review.clone(),
            FormField::Author => self.author.clone(),
            FormField::Description => self.description.clone(),
            FormField::Ingredients => self.ingredients.display(),
            FormField::Method => self.method.display(),
        }
    }

    /// Build the request body sent on create and update
    pub fn to_payload(&self) -> RecipePayload {
        RecipePayload {
            name: self.name.clone(),
            image: self.image.clone(),
            time: self.time.clone(),
            rating: rating_value(&self.rating),
            category: self.category.clone(),
            url: self.url.clone(),
            review: self.review.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone().into_sequence(),
            method: self.method.clone().into_sequence(),
        }
    }
}

/// Rating as sent: a number when the text is one, the raw text otherwise
fn rating_value(raw: &str) -> serde_json::Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return serde_json::Value::from(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
        .unwrap_or_else(|| serde_json::Value::String(raw.to_string()))
}

/// Request body for `POST /recipes` and `PUT /recipes/{id}`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipePayload {
    pub name: String,
    pub image: String,
    pub time: String,
    pub rating: serde_json::Value,
    pub category: String,
    pub url: String,
    pub review: String,
    pub author: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub method: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_splits_and_trims() {
        let field = ListField::Display("water,  leaves ,sugar".to_string());
        assert_eq!(
            field.normalize(),
            ListField::Canonical(strings(&["water", "leaves", "sugar"]))
        );
    }

    #[test]
    fn test_normalize_is_idempotent_on_sequences() {
        let canonical = ListField::Canonical(strings(&["a, b", " c "]));
        assert_eq!(canonical.clone().normalize(), canonical);
        assert_eq!(canonical.clone().normalize().normalize(), canonical);
    }

    #[test]
    fn test_display_round_trip_without_commas() {
        let items = strings(&["salt", "black pepper", "water"]);
        let display = ListField::display_of(&items);
        assert_eq!(display.display(), "salt, black pepper, water");
        assert_eq!(display.into_sequence(), items);
    }

    #[test]
    fn test_round_trip_is_lossy_with_embedded_commas() {
        let items = strings(&["salt, to taste", "water"]);
        let sequence = ListField::display_of(&items).into_sequence();
        assert_eq!(sequence, strings(&["salt", "to taste", "water"]));
    }

    #[test]
    fn test_empty_display_normalizes_to_single_empty_item() {
        assert_eq!(ListField::default().into_sequence(), strings(&[""]));
    }

    #[test]
    fn test_from_recipe_flattens_sequences() {
        let recipe = Recipe::new(2, "Tea")
            .ingredients(["water", "leaves"])
            .rating(3.0);
        let draft = Draft::from_recipe(&recipe);

        assert_eq!(draft.ingredients, ListField::Display("water, leaves".to_string()));
        assert_eq!(draft.method, ListField::Display(String::new()));
        assert_eq!(draft.rating, "3");
        assert_eq!(draft.name, "Tea");
    }

    #[test]
    fn test_from_recipe_without_sequence_gives_empty_input() {
        let mut recipe = Recipe::new(5, "Mystery");
        recipe.ingredients = None;
        let draft = Draft::from_recipe(&recipe);
        assert_eq!(draft.get(FormField::Ingredients), "");
    }

    #[test]
    fn test_payload_expands_lists() {
        let mut draft = Draft::default();
        draft.set(FormField::Name, "Tea");
        draft.set(FormField::Ingredients, "water, leaves");
        draft.method = ListField::Canonical(strings(&["steep, then pour"]));

        let payload = draft.to_payload();
        assert_eq!(payload.ingredients, strings(&["water", "leaves"]));
        assert_eq!(payload.method, strings(&["steep, then pour"]));
        assert_eq!(payload.rating, serde_json::json!(0));
    }

    #[test]
    fn test_payload_rating_is_free_form() {
        let mut draft = Draft::default();

        draft.set(FormField::Rating, "4.5");
        assert_eq!(draft.to_payload().rating, serde_json::json!(4.5));

        draft.set(FormField::Rating, "11");
        assert_eq!(draft.to_payload().rating, serde_json::json!(11));

        draft.set(FormField::Rating, "");
        assert_eq!(draft.to_payload().rating, serde_json::json!(""));
    }

    #[test]
    fn test_payload_json_shape() {
        let mut draft = Draft::default();
        draft.set(FormField::Name, "Tea");
        draft.set(FormField::Ingredients, "water, leaves");

        let json = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(json["name"], "Tea");
        assert_eq!(json["ingredients"], serde_json::json!(["water", "leaves"]));
        assert_eq!(json["method"], serde_json::json!([""]));
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(FormField::from_key("Ingredients"), Some(FormField::Ingredients));
        assert_eq!(FormField::from_key("url"), Some(FormField::Url));
        assert_eq!(FormField::from_key("colour"), None);
        assert_eq!(FormField::Url.label(), "Recipe URL");
    }
}
