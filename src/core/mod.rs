pub mod controller;
pub mod navigation;
pub mod quantity;

pub use crate::domain::model::{
    Beverage, BeverageType, ButtonControl, CartItem, CartItemRequest, DisplayTarget, NavEntry,
    Notification, NotificationLevel, SelectControl, SelectOption,
};
pub use crate::domain::ports::{Page, StorefrontApi};
pub use crate::utils::error::Result;
