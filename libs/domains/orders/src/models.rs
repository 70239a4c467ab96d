use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// One line of an order: a product reference and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItem {
    /// Identifier of the product being ordered
    pub product_id: String,

    /// Number of units, at least one
    #[validate(range(min = 1))]
    pub quantity: i64,
}

/// Customer details captured with the order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Customer {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub address: String,
}

/// Payload for placing an order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrder {
    #[validate(nested)]
    pub customer: Customer,

    #[validate(nested)]
    pub items: Vec<OrderItem>,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Order as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderSummary {
    /// Store-assigned identifier
    pub id: String,

    /// Total in currency units, rounded to two decimal places
    #[serde(default)]
    pub total: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// Query parameters for listing orders.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Maximum number of orders returned, most recent first (default 50)
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(items: serde_json::Value) -> CreateOrder {
        serde_json::from_value(json!({
            "customer": { "name": "Jo", "email": "jo@example.com", "address": "1 Main St" },
            "items": items,
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_order_passes_validation() {
        let input = order(json!([{ "product_id": "abc", "quantity": 2 }]));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let input = order(json!([{ "product_id": "abc", "quantity": 0 }]));
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_nested_customer_email_is_validated() {
        let input: CreateOrder = serde_json::from_value(json!({
            "customer": { "name": "Jo", "email": "not-an-email", "address": "1 Main St" },
            "items": [],
        }))
        .unwrap();
        assert!(input.validate().is_err());
    }
}
