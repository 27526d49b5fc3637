use anyhow::Context;
use clap::Parser;
use storefront_ui::config::{CliConfig, Command, StorefrontConfig};
use storefront_ui::domain::model::{ButtonControl, SelectControl};
use storefront_ui::utils::logger;
use storefront_ui::{
    is_valid_positive_integer, populate_quantity_options, ConsolePage, HttpStorefrontApi,
    StorefrontController,
};
use url::Url;

const EXIT_CONFIG_ERROR: i32 = 1;
const EXIT_REQUEST_FAILED: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Offline commands need no backend and no config
    if cli.is_offline() {
        init_logger(&cli, None);
        run_offline(&cli.command);
        return Ok(());
    }

    // Load and validate config
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };
    // Init logging
    init_logger(&cli, Some(&config));

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // Build the backend client and the controller
    let api = HttpStorefrontApi::from_config(&config.api).context("building HTTP client")?;
    tracing::info!("Starting storefront CLI against {}", api.base_url());
    let controller = StorefrontController::new(api, ConsolePage)
        .with_currency_symbol(config.currency_symbol());

    // Run the command; the page has already reported any failure
    let succeeded = run_online(&controller, &cli.command).await?;
    if !succeeded {
        std::process::exit(EXIT_REQUEST_FAILED);
    }

    Ok(())
}

fn init_logger(cli: &CliConfig, config: Option<&StorefrontConfig>) {
    let level = config.and_then(|c| c.log_level());
    let json = cli.json_logs || config.is_some_and(|c| c.json_logs());

    if json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }
}

fn run_offline(command: &Command) {
    match command {
        Command::Quantities { allowed } => {
            let mut select = SelectControl::default();
            let mut button = ButtonControl::default();
            populate_quantity_options(*allowed, &mut select, &mut button);

            if select.disabled {
                println!("🚫 Out of stock: quantity selector and add-to-cart button disabled");
            } else {
                let values: Vec<&str> = select.options.iter().map(|o| o.value.as_str()).collect();
                println!("📋 Quantity options: {}", values.join(", "));
            }
        }
        Command::Validate { value } => {
            if is_valid_positive_integer(value.as_str()) {
                println!("✅ '{}' is a valid quantity", value);
            } else {
                println!("❌ '{}' is not a valid quantity", value);
            }
        }
        other => tracing::error!("Command {:?} needs the backend", other),
    }
}

/// Runs a backend command. Returns false when the backend call failed;
/// the page has already shown the failure.
async fn run_online(
    controller: &StorefrontController<HttpStorefrontApi, ConsolePage>,
    command: &Command,
) -> anyhow::Result<bool> {
    let succeeded = match command {
        Command::PageLoad { url } => {
            let location = Url::parse(url).with_context(|| format!("invalid page URL '{}'", url))?;
            if controller.on_page_load(&location).await.is_none() {
                println!("🧭 No nav entry matches {}", location);
            }
            true
        }
        Command::Count => controller.refresh_cart_item_count().await.is_ok(),
        Command::Total => controller.refresh_cart_total().await.is_ok(),
        Command::Add {
            beverage_id,
            quantity,
            is_crate,
        } => match controller.add_item_to_cart(*beverage_id, *quantity, !is_crate).await {
            Ok(item) => {
                println!(
                    "🛒 Cart item {}: {} x {} ({:.2})",
                    item.cart_item_id,
                    item.quantity,
                    item.name,
                    item.item_total()
                );
                true
            }
            Err(_) => false,
        },
        Command::Remove { cart_item_id } => controller
            .remove_item_from_cart(*cart_item_id, || {
                println!("🗑️  Cart item {} removed", cart_item_id);
            })
            .await
            .is_ok(),
        Command::Stock {
            beverage_id,
            quantity,
            is_crate,
        } => match controller
            .add_stock_to_beverage(*beverage_id, *quantity, !is_crate)
            .await
        {
            Ok(beverage) => {
                println!("📦 {} now has {} in stock", beverage.name, beverage.in_stock);
                true
            }
            Err(_) => false,
        },
        Command::Invoice { order_number } => match controller.regenerate_invoice(order_number).await {
            Ok(message) => {
                println!("🧾 {}", message);
                true
            }
            Err(_) => false,
        },
        Command::Logout => {
            controller.on_logout_clicked();
            true
        }
        Command::Quantities { .. } | Command::Validate { .. } => {
            run_offline(command);
            true
        }
    };

    Ok(succeeded)
}
