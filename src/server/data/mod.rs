//! Store repository layer.
//!
//! Repositories issue document store operations through the `DataAccessor` seam and
//! return the stored document models. Conversion into domain models happens in the
//! service layer so that repositories stay free of request concerns.

pub mod restaurant;

#[cfg(test)]
mod test;
