//! API data transfer objects.
//!
//! Types in this module define the JSON shapes exchanged over HTTP. They carry no
//! behavior beyond (de)serialization and are converted to and from the server's
//! domain models at the controller boundary.

pub mod api;
pub mod restaurant;
