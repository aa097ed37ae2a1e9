use std::time::Duration;

use thiserror::Error;

use super::types::{ListResponse, OrderConfirmation, OrderRequest, RawProduct};
use crate::config::ApiConfig;
use crate::model::order::OrderDraft;
use crate::model::product::ProductItem;

/// Errors crossing the network boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("order draft is missing a payment method")]
    IncompleteDraft,
}

/// Blocking HTTP client for the store API. Lives on worker threads; the UI
/// thread never blocks on it.
#[derive(Debug, Clone)]
pub struct StoreApi {
    http: reqwest::blocking::Client,
    base_url: String,
    assets_url: String,
}

impl StoreApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            assets_url: config.assets_url.clone(),
        })
    }

    /// GET `/product`: the full catalog, normalized.
    pub fn get_product_list(&self) -> Result<Vec<ProductItem>, ApiError> {
        let response: ListResponse<RawProduct> = self
            .http
            .get(format!("{}/product", self.base_url))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response
            .items
            .into_iter()
            .map(|raw| raw.into_item(&self.assets_url))
            .collect())
    }

    /// GET `/product/{id}`: a single product, normalized.
    pub fn get_product_item(&self, id: &str) -> Result<ProductItem, ApiError> {
        let raw: RawProduct = self
            .http
            .get(format!("{}/product/{}", self.base_url, id))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(raw.into_item(&self.assets_url))
    }

    /// POST `/order`: submit the draft, returning the server confirmation.
    pub fn submit_order(&self, draft: &OrderDraft) -> Result<OrderConfirmation, ApiError> {
        let request = OrderRequest::from_draft(draft).ok_or(ApiError::IncompleteDraft)?;
        let confirmation = self
            .http
            .post(format!("{}/order", self.base_url))
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(confirmation)
    }
}
