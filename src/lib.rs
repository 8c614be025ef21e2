//! # Recipe Book
//!
//! A recipe manager over a remote REST collection: a form bound to a draft,
//! a card list mirroring the remote `recipes` resource, and the four calls
//! that keep the two in sync.
//!
//! ## Modules
//!
//! - [`model`]: recipes, the form draft and the display/canonical list fields
//! - [`store`]: the state container and its pure reducer
//! - [`api`]: the transport seam and its errors
//! - [`manager`]: runs operations against a transport and applies results
//! - [`view`]: text rendering shared by the terminal and web frontends
//! - [`client`], [`config`], [`logging`], [`shell`]: native transport,
//!   setup and the terminal form (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recipe_book::client::{ClientConfig, RecipeClient};
//! use recipe_book::model::FormField;
//! use recipe_book::RecipeManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RecipeClient::new(ClientConfig::default())?;
//!     let mut manager = RecipeManager::new(client);
//!
//!     manager.list().await?;
//!
//!     manager.set_field(FormField::Name, "Tea");
//!     manager.set_field(FormField::Ingredients, "water, leaves");
//!     let created = manager.submit().await?;
//!
//!     println!("{:?}", created);
//!     println!("{}", recipe_book::view::render_list(manager.recipes()));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod manager;
pub mod model;
pub mod store;
pub mod view;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod shell;

// Re-export top-level types for convenience
pub use api::{ApiError, RecipeApi, DEFAULT_BASE_URL};
pub use manager::{ManagerError, ManagerResult, RecipeManager, Submitted};
pub use model::{Draft, FormField, ListField, Recipe, RecipeId, RecipePayload};
pub use store::{reduce, Action, EditMode, RecipeState};

#[cfg(feature = "native")]
pub use client::{ClientConfig, RecipeClient};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
