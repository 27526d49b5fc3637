pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpStorefrontApi, page::ConsolePage, page::MemoryPage};
pub use config::StorefrontConfig;
pub use core::controller::StorefrontController;
pub use core::navigation::{active_entry, highlight_active_link};
pub use core::quantity::populate_quantity_options;
pub use utils::error::{Result, StorefrontError};
pub use utils::validation::is_valid_positive_integer;
