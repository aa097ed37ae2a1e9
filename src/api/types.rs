use serde::{Deserialize, Serialize};

use crate::model::order::{OrderDraft, PaymentMethod};
use crate::model::product::ProductItem;

/// Product payload as the store API sends it. `image` is a path relative to
/// the asset host.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: String,
    pub description: String,
    pub image: String,
    pub title: String,
    pub category: String,
    pub price: Option<u64>,
}

impl RawProduct {
    /// Normalize into a catalog entity, rewriting the relative image path
    /// against the configured asset host.
    pub fn into_item(self, assets_url: &str) -> ProductItem {
        let image = join_url(assets_url, &self.image);
        ProductItem {
            id: self.id,
            title: self.title,
            description: self.description,
            image,
            category: self.category,
            price: self.price,
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Envelope for list endpoints: `{ total, items }`.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub total: u64,
    pub items: Vec<T>,
}

/// Body POSTed to `/order`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderRequest {
    pub payment: PaymentMethod,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub items: Vec<String>,
    pub total: u64,
}

impl OrderRequest {
    /// Build the wire form of a draft. Returns `None` when no payment
    /// method is selected; submission is gated on a valid draft, so this is
    /// a programmer-error guard rather than a user-facing path.
    pub fn from_draft(draft: &OrderDraft) -> Option<Self> {
        Some(Self {
            payment: draft.payment?,
            address: draft.address.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            items: draft.items.clone(),
            total: draft.total,
        })
    }
}

/// Server acknowledgement of a submitted order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub id: String,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(image: &str) -> RawProduct {
        RawProduct {
            id: "p1".to_string(),
            description: "desc".to_string(),
            image: image.to_string(),
            title: "Widget".to_string(),
            category: "other".to_string(),
            price: Some(100),
        }
    }

    #[test]
    fn image_path_is_prefixed_with_asset_host() {
        let item = raw("/images/widget.svg").into_item("https://cdn.example/content");
        assert_eq!(item.image, "https://cdn.example/content/images/widget.svg");
    }

    #[test]
    fn image_prefixing_handles_trailing_slash() {
        let item = raw("images/widget.svg").into_item("https://cdn.example/content/");
        assert_eq!(item.image, "https://cdn.example/content/images/widget.svg");
    }

    #[test]
    fn order_request_requires_payment_method() {
        let mut draft = OrderDraft::default();
        draft.payment = None;
        assert!(OrderRequest::from_draft(&draft).is_none());
        draft.payment = Some(PaymentMethod::Cash);
        let request = OrderRequest::from_draft(&draft).unwrap();
        assert_eq!(request.payment, PaymentMethod::Cash);
    }
}
