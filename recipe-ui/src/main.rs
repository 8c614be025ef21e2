//! Recipe Book Frontend
//!
//! Single-page recipe manager built with Leptos (WASM): an add/edit form on
//! one side, the recipe cards fetched from the recipe service on the other.
//!
//! # Architecture
//!
//! The page state is a `recipe_book::RecipeState` held in one signal and
//! changed only through `recipe_book::reduce`. Remote calls go through
//! `recipe_book::RecipeApi`, implemented here over `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
