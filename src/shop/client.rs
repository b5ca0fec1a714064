// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the shop backend.

use super::ShopResponse;
use crate::error::{Error, Result};
use serde::Serialize;

const USER_AGENT: &str = concat!("OverlayCoordinator/", env!("CARGO_PKG_VERSION"));

/// Fields of the product review form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewForm {
    #[serde(rename = "product-id")]
    pub product_id: u64,
    #[serde(rename = "review-input")]
    pub comment: String,
    pub ratings: u8,
}

/// Talks to the shop endpoints under a base URL.
#[derive(Debug, Clone)]
pub struct ShopClient {
    http: reqwest::Client,
    base_url: String,
}

impl ShopClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn cart_url(&self, product_id: u64) -> String {
        format!("{}/cart/{}", self.base_url, product_id)
    }

    #[must_use]
    pub fn review_url(&self) -> String {
        format!("{}/review", self.base_url)
    }

    /// `PUT {base}/cart/{id}`.
    pub async fn add_to_cart(&self, product_id: u64) -> Result<ShopResponse> {
        let url = self.cart_url(product_id);
        tracing::debug!(%url, "adding product to cart");
        let response = self.http.put(&url).send().await;
        Self::decode(&url, response).await
    }

    /// Form `POST {base}/review`.
    pub async fn post_review(&self, form: &ReviewForm) -> Result<ShopResponse> {
        let url = self.review_url();
        tracing::debug!(%url, product_id = form.product_id, "posting review");
        let response = self.http.post(&url).form(form).send().await;
        Self::decode(&url, response).await
    }

    async fn decode(
        url: &str,
        response: std::result::Result<reqwest::Response, reqwest::Error>,
    ) -> Result<ShopResponse> {
        let response = response.inspect_err(|err| tracing::warn!(%url, %err, "request failed"))?;
        let status = response.status();
        let body = response.text().await?;

        match ShopResponse::from_json(&body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => {
                tracing::warn!(%url, %status, "shop call failed");
                Err(Error::Http(format!("HTTP status: {status}")))
            }
            Err(err) => {
                tracing::warn!(%url, %err, "undecodable shop response");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_under_base() {
        let client = ShopClient::new("https://shop.example/").unwrap();
        assert_eq!(client.base_url(), "https://shop.example");
        assert_eq!(client.cart_url(12), "https://shop.example/cart/12");
        assert_eq!(client.review_url(), "https://shop.example/review");
    }

    #[test]
    fn review_form_uses_page_field_names() {
        let form = ReviewForm {
            product_id: 7,
            comment: "Great".to_string(),
            ratings: 5,
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["product-id"], 7);
        assert_eq!(value["review-input"], "Great");
        assert_eq!(value["ratings"], 5);
    }

    #[tokio::test]
    async fn unreachable_backend_maps_to_http_error() {
        // port 9 (discard) on localhost is expected to refuse connections
        let client = ShopClient::new("http://127.0.0.1:9").unwrap();
        let result = client.add_to_cart(1).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
