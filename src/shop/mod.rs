// SPDX-License-Identifier: MPL-2.0
//! Storefront calls whose outcome is reported through toasts.
//!
//! - [`client`]: HTTP calls to the shop backend (`PUT /cart/{id}`, `POST /review`)
//! - [`feedback`]: maps call outcomes to localized toasts

pub mod client;
pub mod feedback;

pub use client::{ReviewForm, ShopClient};
pub use feedback::{cart_feedback, notify_cart, notify_review, review_feedback};

use serde::Deserialize;

/// Body returned by every shop endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShopResponse {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl ShopResponse {
    /// Decodes a response body.
    pub fn from_json(body: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The posted review, when `data` carries one.
    #[must_use]
    pub fn review(&self) -> Option<Review> {
        serde_json::from_value(self.data.clone()).ok()
    }
}

/// A review as echoed back by `POST /review`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub ratings: Option<u8>,
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Review {
    #[must_use]
    pub fn author(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}
