use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeverageType {
    Bottle,
    Crate,
}

impl BeverageType {
    pub fn from_is_bottle(is_bottle: bool) -> Self {
        if is_bottle {
            BeverageType::Bottle
        } else {
            BeverageType::Crate
        }
    }

    /// REST collection that owns beverages of this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            BeverageType::Bottle => "bottles",
            BeverageType::Crate => "crates",
        }
    }
}

impl fmt::Display for BeverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeverageType::Bottle => write!(f, "BOTTLE"),
            BeverageType::Crate => write!(f, "CRATE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub beverage_id: u64,
    pub beverage_type: BeverageType,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub cart_item_id: u64,
    pub beverage_type: BeverageType,
    pub beverage_id: u64,
    pub quantity: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pic_url: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub in_stock: i64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub volume_percent: f64,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub no_of_bottle: i64,
}

impl CartItem {
    pub fn item_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockUpdateRequest {
    pub quantity: i64,
}

/// A bottle or crate as returned by the stock endpoints.
///
/// Fields shared by both kinds are typed; kind-specific ones (bottle
/// volume and supplier, crate size and contained bottle) stay in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beverage {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub pic_url: String,
    pub price: f64,
    pub in_stock: i64,
    #[serde(default)]
    pub allowed_in_stock: i64,
    #[serde(flatten)]
    pub details: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Text targets the controller writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTarget {
    CartCountBadge,
    CartCountText,
    CartCountField,
    CartTotalText,
}

impl DisplayTarget {
    pub fn selector(&self) -> &'static str {
        match self {
            DisplayTarget::CartCountBadge => "#badge-cart-item-count",
            DisplayTarget::CartCountText => "#txt-cart-item-count",
            DisplayTarget::CartCountField => "input[name=\"cartItemCount\"]",
            DisplayTarget::CartTotalText => "#txt-cart-total",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavEntry {
    Home,
    Crates,
    Bottles,
    Cart,
    Order,
    Customer,
}

impl NavEntry {
    pub const ALL: [NavEntry; 6] = [
        NavEntry::Home,
        NavEntry::Crates,
        NavEntry::Bottles,
        NavEntry::Cart,
        NavEntry::Order,
        NavEntry::Customer,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            NavEntry::Home => "home",
            NavEntry::Crates => "crates",
            NavEntry::Bottles => "bottles",
            NavEntry::Cart => "cart",
            NavEntry::Order => "order",
            NavEntry::Customer => "customer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    pub options: Vec<SelectOption>,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonControl {
    pub disabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_request_wire_format() {
        let request = CartItemRequest {
            beverage_id: 7,
            beverage_type: BeverageType::from_is_bottle(false),
            quantity: 2,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"beverageId": 7, "beverageType": "CRATE", "quantity": 2})
        );
    }

    #[test]
    fn test_cart_item_from_backend_payload() {
        let payload = serde_json::json!({
            "cartItemId": 3,
            "beverageType": "BOTTLE",
            "beverageId": 11,
            "quantity": 4,
            "name": "Pils",
            "picUrl": "https://img.example.com/pils.png",
            "price": 1.25,
            "inStock": 30,
            "volume": 0.5,
            "volumePercent": 4.9,
            "supplier": "Brewery",
            "noOfBottle": 0,
            "itemTotal": 5.0
        });

        let item: CartItem = serde_json::from_value(payload).unwrap();
        assert_eq!(item.cart_item_id, 3);
        assert_eq!(item.beverage_type, BeverageType::Bottle);
        assert_eq!(item.item_total(), 5.0);
    }

    #[test]
    fn test_beverage_keeps_kind_specific_fields() {
        let payload = serde_json::json!({
            "id": 2,
            "name": "Pils Crate",
            "picUrl": "https://img.example.com/crate.png",
            "price": 14.0,
            "inStock": 12,
            "allowedInStock": 12,
            "noOfBottles": 20
        });

        let crate_: Beverage = serde_json::from_value(payload).unwrap();
        assert_eq!(crate_.in_stock, 12);
        assert_eq!(crate_.details.get("noOfBottles"), Some(&serde_json::json!(20)));
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(BeverageType::Bottle.collection(), "bottles");
        assert_eq!(BeverageType::Crate.collection(), "crates");
        assert_eq!(BeverageType::Bottle.to_string(), "BOTTLE");
    }
}
