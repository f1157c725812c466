//! Restaurant fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating restaurant document models without store
//! insertion. These are useful for seeding a `TestBuilder` and for comparing against
//! repository results.

use bson::oid::ObjectId;
use entity::restaurant;

/// Default test restaurant name.
pub const DEFAULT_NAME: &str = "Test Restaurant";

/// Default test restaurant city.
pub const DEFAULT_CITY: &str = "Moscow";

/// Default test restaurant rating.
pub const DEFAULT_RATING: Option<f64> = Some(5.0);

/// Creates a restaurant document model with default values and a fresh id.
///
/// # Default Values
/// - id: new `ObjectId`
/// - name: `"Test Restaurant"`
/// - city: `"Moscow"`
/// - rating: `Some(5.0)`
/// - menu: empty
pub fn entity() -> restaurant::Model {
    restaurant::Model {
        id: ObjectId::new(),
        name: DEFAULT_NAME.to_string(),
        city: DEFAULT_CITY.to_string(),
        rating: DEFAULT_RATING,
        menu: Vec::new(),
    }
}

/// Two restaurants with distinct names, cities and ratings, in insertion order.
pub fn simple_restaurant_set() -> Vec<restaurant::Model> {
    vec![
        restaurant::Model {
            id: ObjectId::new(),
            name: "Name1".to_string(),
            city: "City1".to_string(),
            rating: Some(4.5),
            menu: Vec::new(),
        },
        restaurant::Model {
            id: ObjectId::new(),
            name: "Name2".to_string(),
            city: "City2".to_string(),
            rating: Some(5.5),
            menu: Vec::new(),
        },
    ]
}
