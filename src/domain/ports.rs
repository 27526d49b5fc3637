use crate::domain::model::{
    Beverage, BeverageType, CartItem, CartItemRequest, DisplayTarget, NavEntry, Notification,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The storefront REST backend.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    async fn cart_item_count(&self) -> Result<u64>;
    async fn cart_total(&self) -> Result<f64>;
    async fn add_cart_item(&self, request: &CartItemRequest) -> Result<CartItem>;
    async fn remove_cart_item(&self, cart_item_id: u64) -> Result<()>;
    async fn add_stock(
        &self,
        beverage_type: BeverageType,
        beverage_id: u64,
        quantity: i64,
    ) -> Result<Beverage>;
    async fn regenerate_invoice(&self, order_number: &str) -> Result<String>;
}

/// The page the controller renders into.
pub trait Page: Send + Sync {
    fn clear_nav_active(&self);
    fn mark_nav_active(&self, entry: NavEntry);
    fn set_text(&self, target: DisplayTarget, text: &str);
    fn block_screen(&self);
    fn unblock_screen(&self);
    fn notify(&self, notification: Notification);
    fn submit_logout_form(&self);
}
