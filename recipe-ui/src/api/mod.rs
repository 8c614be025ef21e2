//! API Layer
//!
//! Browser transport to the recipe service.

pub mod client;

pub use client::{get_api_base, set_api_base, HttpRecipeApi};
