use serde::{Deserialize, Serialize};

use crate::events::OrderField;

/// How the order will be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Online,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Online => "online",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "online" => Some(PaymentMethod::Online),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }
}

/// The in-progress, not-yet-submitted order form data.
///
/// `items` and `total` are snapshots taken by
/// [`AppState::prepare_checkout`](crate::model::AppState::prepare_checkout)
/// when checkout starts; they are not kept live against the basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// `None` models "no method selected"; the draft starts with online
    /// payment preselected.
    pub payment: Option<PaymentMethod>,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub items: Vec<String>,
    pub total: u64,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            payment: Some(PaymentMethod::Online),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Result of the last full validation pass over the order draft.
/// All-`None` means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub payment: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.payment.is_none()
            && self.address.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }

    pub fn get(&self, field: OrderField) -> Option<&str> {
        match field {
            OrderField::Payment => self.payment.as_deref(),
            OrderField::Address => self.address.as_deref(),
            OrderField::Email => self.email.as_deref(),
            OrderField::Phone => self.phone.as_deref(),
        }
    }

    /// Messages for the first checkout step (payment + address).
    pub fn order_message(&self) -> String {
        join_messages(&[&self.payment, &self.address])
    }

    /// Messages for the second checkout step (email + phone).
    pub fn contacts_message(&self) -> String {
        join_messages(&[&self.email, &self.phone])
    }

    /// The first step is valid when neither payment nor address has an error.
    pub fn order_valid(&self) -> bool {
        self.payment.is_none() && self.address.is_none()
    }

    /// The second step is valid when neither email nor phone has an error.
    pub fn contacts_valid(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

fn join_messages(fields: &[&Option<String>]) -> String {
    fields
        .iter()
        .filter_map(|message| message.as_deref())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_round_trips_through_str() {
        assert_eq!(
            PaymentMethod::from_str(PaymentMethod::Cash.as_str()),
            Some(PaymentMethod::Cash)
        );
        assert_eq!(PaymentMethod::from_str("card"), None);
    }

    #[test]
    fn default_draft_preselects_online_payment() {
        let draft = OrderDraft::default();
        assert_eq!(draft.payment, Some(PaymentMethod::Online));
        assert!(draft.items.is_empty());
        assert_eq!(draft.total, 0);
    }

    #[test]
    fn step_messages_join_only_present_errors() {
        let errors = FormErrors {
            email: Some("Email is required".to_string()),
            phone: Some("Phone is required".to_string()),
            ..FormErrors::default()
        };
        assert!(errors.order_valid());
        assert!(!errors.contacts_valid());
        assert_eq!(errors.order_message(), "");
        assert_eq!(errors.contacts_message(), "Email is required; Phone is required");
    }
}
