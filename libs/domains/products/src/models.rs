use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_in_stock() -> bool {
    true
}

/// Payload for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    /// Display title, must not be empty
    #[validate(length(min = 1))]
    pub title: String,

    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price, must not be negative
    #[validate(range(min = 0.0))]
    pub price: f64,

    /// Category used for exact-match filtering on list
    pub category: String,

    /// Optional image URL
    #[serde(default)]
    pub image_url: Option<String>,

    /// Availability flag, defaults to true when omitted
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// Product as returned by the API.
///
/// Built from the stored document, so identifiers are hex strings and
/// timestamps are ISO-8601 strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response for a successful create: just the new identifier.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

/// Query parameters for listing products.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Exact-match category filter
    pub category: Option<String>,
}
