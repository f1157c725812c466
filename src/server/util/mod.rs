//! Small parsing helpers shared by controllers.

pub mod parse;
