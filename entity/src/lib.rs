//! Document models persisted in the store.
//!
//! Each module describes the shape of one collection's documents as they are
//! written to and read from the document store. Embedded documents (such as the
//! dishes of a restaurant menu) live in their own module but have no collection
//! of their own.

pub mod dish;
pub mod restaurant;

pub mod prelude {
    pub use crate::dish::Model as Dish;
    pub use crate::restaurant::Model as Restaurant;
    pub use crate::restaurant::COLLECTION_NAME as RESTAURANT_COLLECTION;
}
