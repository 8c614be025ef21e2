//! UI Components
//!
//! Leptos components for the recipe page.

pub mod recipe_card;
pub mod recipe_form;
pub mod service_settings;
pub mod toast;

pub use recipe_card::RecipeList;
pub use recipe_form::RecipeForm;
pub use service_settings::ServiceSettings;
pub use toast::Toast;
