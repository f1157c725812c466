use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::dish;

pub const COLLECTION_NAME: &str = "restaurants";

/// Field names as they appear in stored documents.
pub mod field {
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const CITY: &str = "city";
    pub const RATING: &str = "rating";
    pub const MENU: &str = "menu";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Missing when the document was read with the menu projected out.
    #[serde(default)]
    pub menu: Vec<dish::Model>,
}

/// A restaurant document read with only its `menu` field projected in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MenuProjection {
    #[serde(default)]
    pub menu: Vec<dish::Model>,
}
