//! Dish fixtures for creating in-memory test data.

use entity::dish;

/// Default test dish name.
pub const DEFAULT_NAME: &str = "Borscht";

/// Default test dish price in minor units.
pub const DEFAULT_PRICE: i64 = 45_000;

/// Creates an embedded dish model with default values and no identifier.
pub fn entity() -> dish::Model {
    dish::Model {
        id: None,
        name: DEFAULT_NAME.to_string(),
        price: DEFAULT_PRICE,
    }
}

/// Creates an embedded dish model with the given name and price.
pub fn named(name: &str, price: i64) -> dish::Model {
    dish::Model {
        id: None,
        name: name.to_string(),
        price,
    }
}
