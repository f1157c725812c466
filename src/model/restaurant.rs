use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A dish as returned by the API.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DishDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Price multiplied by 100.
    pub price: i64,
}

/// A dish as submitted when creating a restaurant or appending to its menu.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDishDto {
    pub name: String,
    /// Price multiplied by 100.
    pub price: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RestaurantDto {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<DishDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRestaurantDto {
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub menu: Vec<CreateDishDto>,
}

/// Partial change; omitted fields are left untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateRestaurantDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Query string of `GET /restaurants`.
///
/// `page` and `ordering` are kept as raw strings so that malformed values are
/// reported with a specific message instead of a generic extractor rejection.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RestaurantQueryDto {
    /// Restaurant id (24 hex characters).
    pub id: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub rating: Option<f64>,
    /// Page number starting at 1; absent or 0 returns every match.
    pub page: Option<String>,
    /// Field to order by; a leading `-` sorts descending.
    pub ordering: Option<String>,
}
