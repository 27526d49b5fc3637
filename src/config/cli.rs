use crate::config::toml_config::{DisplayConfig, StorefrontConfig};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "Drive the beverage storefront's cart, stock and invoice actions")]
pub struct CliConfig {
    #[arg(long, short, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Backend base URL, overrides api.base_url")]
    pub base_url: Option<String>,

    #[arg(long, help = "Currency symbol, overrides display.currency_symbol")]
    pub currency: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Highlight the nav entry for a page URL and show the cart count
    PageLoad { url: String },
    /// Show the cart item count
    Count,
    /// Show the cart total
    Total,
    /// Add a beverage to the cart
    Add {
        #[arg(long)]
        beverage_id: u64,
        #[arg(long)]
        quantity: i64,
        #[arg(long = "crate", help = "The beverage is a crate rather than a bottle")]
        is_crate: bool,
    },
    /// Remove a line from the cart
    Remove { cart_item_id: u64 },
    /// Add stock to a bottle or crate
    Stock {
        #[arg(long)]
        beverage_id: u64,
        #[arg(long)]
        quantity: i64,
        #[arg(long = "crate", help = "The beverage is a crate rather than a bottle")]
        is_crate: bool,
    },
    /// Regenerate the invoice of an order
    Invoice { order_number: String },
    /// List the quantity options for an allowed quantity
    Quantities {
        #[arg(allow_hyphen_values = true)]
        allowed: i64,
    },
    /// Check a quantity input
    Validate {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Submit the logout form
    Logout,
}

impl CliConfig {
    /// Loads the config file if one was given and applies command-line
    /// overrides on top of it.
    pub fn resolve(&self) -> Result<StorefrontConfig> {
        let file_config = self
            .config
            .as_ref()
            .map(StorefrontConfig::from_file)
            .transpose()?;

        let base_url = self
            .base_url
            .clone()
            .or_else(|| file_config.as_ref().map(|c| c.api.base_url.clone()));
        let base_url = validation::validate_required_field("api.base_url", &base_url)?;

        let mut config = file_config.unwrap_or_else(|| StorefrontConfig::for_base_url(base_url));
        config.api.base_url = base_url.clone();

        if let Some(symbol) = &self.currency {
            config.display = Some(DisplayConfig {
                currency_symbol: Some(symbol.clone()),
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// True for commands that never talk to the backend.
    pub fn is_offline(&self) -> bool {
        matches!(
            self.command,
            Command::Quantities { .. } | Command::Validate { .. }
        )
    }
}
