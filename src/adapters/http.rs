use crate::config::toml_config::ApiConfig;
use crate::domain::model::{
    Beverage, BeverageType, CartItem, CartItemRequest, StockUpdateRequest,
};
use crate::domain::ports::StorefrontApi;
use crate::utils::error::{Result, StorefrontError};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use url::Url;

/// `StorefrontApi` over the backend's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: Client,
    base_url: Url,
    headers: HashMap<String, String>,
}

impl HttpStorefrontApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Self::build_client(true)?, base_url)
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let client = Self::build_client(config.cookie_store.unwrap_or(true))?;
        let api = Self::with_client(client, &config.base_url)?;
        let headers = config.headers.iter().flatten();
        Ok(headers.fold(api, |api, (name, value)| api.with_header(name, value)))
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(StorefrontError::InvalidConfigValueError {
                field: "api.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url,
            headers: HashMap::new(),
        })
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // The backend keeps the cart in the session, so cookies have to survive
    // between calls.
    fn build_client(cookie_store: bool) -> Result<Client> {
        Ok(Client::builder().cookie_store(cookie_store).build()?)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self.client.request(method, url);
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }
        request
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response> {
        tracing::debug!("📡 Sending request to {}", url);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 {} answered {}", url.path(), status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(StorefrontError::StatusError {
            endpoint: url.path().to_string(),
            status: status.as_u16(),
            body,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, url: &Url) -> Result<T> {
        let response = self.send(request, url).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn cart_item_count(&self) -> Result<u64> {
        let url = self.endpoint(&["api", "cart-items", "count"]);
        self.send_json(self.request(Method::GET, url.clone()), &url).await
    }

    async fn cart_total(&self) -> Result<f64> {
        let url = self.endpoint(&["api", "cart-items", "total-price"]);
        self.send_json(self.request(Method::GET, url.clone()), &url).await
    }

    async fn add_cart_item(&self, request: &CartItemRequest) -> Result<CartItem> {
        let url = self.endpoint(&["api", "cart-items"]);
        let builder = self.request(Method::POST, url.clone()).json(request);
        self.send_json(builder, &url).await
    }

    async fn remove_cart_item(&self, cart_item_id: u64) -> Result<()> {
        let id = cart_item_id.to_string();
        let url = self.endpoint(&["api", "cart-items", &id]);
        self.send(self.request(Method::DELETE, url.clone()), &url).await?;
        Ok(())
    }

    async fn add_stock(
        &self,
        beverage_type: BeverageType,
        beverage_id: u64,
        quantity: i64,
    ) -> Result<Beverage> {
        let id = beverage_id.to_string();
        let url = self.endpoint(&["api", beverage_type.collection(), &id, "stock"]);
        let builder = self
            .request(Method::PATCH, url.clone())
            .json(&StockUpdateRequest { quantity });
        self.send_json(builder, &url).await
    }

    async fn regenerate_invoice(&self, order_number: &str) -> Result<String> {
        let url = self.endpoint(&["api", "invoice", "order", order_number]);
        let response = self.send(self.request(Method::POST, url.clone()), &url).await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let api = HttpStorefrontApi::new("http://shop.local:8080").unwrap();

        assert_eq!(
            api.endpoint(&["api", "cart-items", "count"]).as_str(),
            "http://shop.local:8080/api/cart-items/count"
        );
        assert_eq!(
            api.endpoint(&["api", BeverageType::Crate.collection(), "4", "stock"]).path(),
            "/api/crates/4/stock"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let api = HttpStorefrontApi::new("http://shop.local/store/").unwrap();

        assert_eq!(
            api.endpoint(&["api", "cart-items"]).path(),
            "/store/api/cart-items"
        );
    }

    #[test]
    fn test_order_number_is_encoded() {
        let api = HttpStorefrontApi::new("http://shop.local").unwrap();

        assert_eq!(
            api.endpoint(&["api", "invoice", "order", "A/1"]).path(),
            "/api/invoice/order/A%2F1"
        );
    }

    #[test]
    fn test_with_header_and_base_url() {
        let api = HttpStorefrontApi::new("http://shop.local/store")
            .unwrap()
            .with_header("X-Requested-With", "XMLHttpRequest");

        assert_eq!(api.base_url().as_str(), "http://shop.local/store");
        assert_eq!(
            api.headers.get("X-Requested-With").map(String::as_str),
            Some("XMLHttpRequest")
        );
    }

    #[test]
    fn test_from_config_copies_headers() {
        let mut headers = HashMap::new();
        headers.insert("X-Client".to_string(), "storefront".to_string());
        let api = HttpStorefrontApi::from_config(&ApiConfig {
            base_url: "http://shop.local".to_string(),
            headers: Some(headers),
            cookie_store: None,
        })
        .unwrap();

        assert_eq!(api.headers.get("X-Client").map(String::as_str), Some("storefront"));
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(HttpStorefrontApi::new("mailto:shop@example.com").is_err());
        assert!(HttpStorefrontApi::new("not a url").is_err());
    }
}
