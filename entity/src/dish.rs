use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A dish embedded in a restaurant's `menu` array.
///
/// Price is stored as an integer number of minor currency units (price × 100)
/// so that rounding never happens on the store side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: i64,
}
