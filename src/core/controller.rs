use crate::core::navigation;
use crate::domain::model::{
    Beverage, BeverageType, CartItem, CartItemRequest, DisplayTarget, NavEntry, Notification,
};
use crate::domain::ports::{Page, StorefrontApi};
use crate::utils::error::Result;
use url::Url;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

const CART_COUNT_TARGETS: [DisplayTarget; 3] = [
    DisplayTarget::CartCountBadge,
    DisplayTarget::CartCountText,
    DisplayTarget::CartCountField,
];

pub mod messages {
    pub const ITEM_ADDED: &str = "Item successfully added to the cart.";
    pub const ITEM_ADD_FAILED: &str = "Error in adding item to the cart.";
    pub const ITEM_REMOVED: &str = "Item successfully removed from the cart";
    pub const ITEM_REMOVE_FAILED: &str = "Error in removing item from the cart.";
    pub const STOCK_ADDED: &str = "Quantity successfully added.";
    pub const STOCK_ADD_FAILED: &str = "Error in adding quantity.";
    pub const INVOICE_REGENERATED: &str = "Invoice successfully regenerated.";
    pub const INVOICE_REGENERATE_FAILED: &str = "Error in regenerating invoice.";
}

/// Renders `amount` with two decimals followed by `symbol`, e.g. `12.50€`.
///
/// Exact ties round away from zero, so `2.625` renders as `2.63`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{:.2}{}", round_cents(amount), symbol)
}

// A value sits exactly halfway between two cents only when its
// fractional part is an odd number of eighths (.125, .375, .625, .875).
// Scaling by 8 is exact, and so is scaling such a value by 100.
fn round_cents(amount: f64) -> f64 {
    let eighths = amount * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 != 0.0;

    if is_tie {
        (amount * 100.0 + 0.5 * amount.signum()) / 100.0
    } else {
        amount
    }
}

/// Drives the storefront page: keeps the cart widgets in sync with the
/// backend and runs the cart, stock and invoice actions.
///
/// Every action hides the screen blocker before anything else happens
/// in either outcome, reports the outcome as a notification, and returns
/// it to the caller.
pub struct StorefrontController<A: StorefrontApi, P: Page> {
    api: A,
    page: P,
    currency_symbol: String,
}

impl<A: StorefrontApi, P: Page> StorefrontController<A, P> {
    pub fn new(api: A, page: P) -> Self {
        Self {
            api,
            page,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub async fn on_page_load(&self, location: &Url) -> Option<NavEntry> {
        let entry = navigation::highlight_active_link(&self.page, location);
        // A failed refresh already rendered 0.
        let _ = self.refresh_cart_item_count().await;
        entry
    }

    pub fn on_logout_clicked(&self) {
        tracing::info!("Submitting logout form");
        self.page.submit_logout_form();
    }

    /// Mirrors the backend's cart item count into the three count widgets.
    /// Any failure shows the cart as empty.
    pub async fn refresh_cart_item_count(&self) -> Result<u64> {
        match self.api.cart_item_count().await {
            Ok(count) => {
                tracing::debug!("Cart item count: {}", count);
                self.render_cart_count(&count.to_string());
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("Cart item count unavailable, showing 0: {}", e);
                self.render_cart_count("0");
                Err(e)
            }
        }
    }

    /// Writes the cart total. A failure leaves the current total in place.
    pub async fn refresh_cart_total(&self) -> Result<f64> {
        let total = self.api.cart_total().await.inspect_err(|e| {
            tracing::warn!("Cart total unavailable: {}", e);
        })?;

        let text = format_currency(total, &self.currency_symbol);
        tracing::debug!("Cart total: {}", text);
        self.page.set_text(DisplayTarget::CartTotalText, &text);
        Ok(total)
    }

    pub async fn add_item_to_cart(
        &self,
        beverage_id: u64,
        quantity: i64,
        is_bottle: bool,
    ) -> Result<CartItem> {
        let request = CartItemRequest {
            beverage_id,
            beverage_type: BeverageType::from_is_bottle(is_bottle),
            quantity,
        };

        self.page.block_screen();
        let outcome = self.api.add_cart_item(&request).await;
        self.page.unblock_screen();

        match outcome {
            Ok(item) => {
                tracing::info!(
                    "Added {} x {} {} to cart (cart item {})",
                    quantity,
                    request.beverage_type,
                    beverage_id,
                    item.cart_item_id
                );
                let _ = self.refresh_cart_item_count().await;
                self.page.notify(Notification::success(messages::ITEM_ADDED));
                Ok(item)
            }
            Err(e) => {
                tracing::warn!("Adding {} {} to cart failed: {}", request.beverage_type, beverage_id, e);
                self.page.notify(Notification::error(messages::ITEM_ADD_FAILED));
                Err(e)
            }
        }
    }

    /// Removes a cart line. `on_removed` runs before the total and count
    /// refreshes, and only when the backend confirmed the removal.
    pub async fn remove_item_from_cart<F>(&self, cart_item_id: u64, on_removed: F) -> Result<()>
    where
        F: FnOnce(),
    {
        self.page.block_screen();
        let outcome = self.api.remove_cart_item(cart_item_id).await;
        self.page.unblock_screen();

        match outcome {
            Ok(()) => {
                tracing::info!("Removed cart item {}", cart_item_id);
                on_removed();
                let _ = self.refresh_cart_total().await;
                let _ = self.refresh_cart_item_count().await;
                self.page.notify(Notification::success(messages::ITEM_REMOVED));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Removing cart item {} failed: {}", cart_item_id, e);
                self.page.notify(Notification::error(messages::ITEM_REMOVE_FAILED));
                Err(e)
            }
        }
    }

    pub async fn add_stock_to_beverage(
        &self,
        beverage_id: u64,
        quantity: i64,
        is_bottle: bool,
    ) -> Result<Beverage> {
        let beverage_type = BeverageType::from_is_bottle(is_bottle);

        self.page.block_screen();
        let outcome = self.api.add_stock(beverage_type, beverage_id, quantity).await;
        self.page.unblock_screen();

        match outcome {
            Ok(beverage) => {
                tracing::info!(
                    "Added {} to stock of {} {} (now {})",
                    quantity,
                    beverage_type,
                    beverage_id,
                    beverage.in_stock
                );
                self.page.notify(Notification::success(messages::STOCK_ADDED));
                Ok(beverage)
            }
            Err(e) => {
                tracing::warn!("Adding stock to {} {} failed: {}", beverage_type, beverage_id, e);
                self.page.notify(Notification::error(messages::STOCK_ADD_FAILED));
                Err(e)
            }
        }
    }

    pub async fn regenerate_invoice(&self, order_number: &str) -> Result<String> {
        self.page.block_screen();
        let outcome = self.api.regenerate_invoice(order_number).await;
        self.page.unblock_screen();

        match outcome {
            Ok(message) => {
                tracing::info!("Regenerated invoice for order {}", order_number);
                self.page.notify(Notification::success(messages::INVOICE_REGENERATED));
                Ok(message)
            }
            Err(e) => {
                tracing::warn!("Regenerating invoice for order {} failed: {}", order_number, e);
                self.page.notify(Notification::error(messages::INVOICE_REGENERATE_FAILED));
                Err(e)
            }
        }
    }

    fn render_cart_count(&self, text: &str) {
        for target in CART_COUNT_TARGETS {
            self.page.set_text(target, text);
        }
    }
}
