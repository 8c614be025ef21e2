//! Recipe data model
//!
//! - **recipe**: records as the remote store returns them
//! - **draft**: the editable form state and its submission payload

pub mod draft;
pub mod recipe;

pub use draft::{Draft, FormField, ListField, RecipePayload};
pub use recipe::{format_rating, Recipe, RecipeId};
