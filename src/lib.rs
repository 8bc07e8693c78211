/// The character classes and length a password is generated from.
pub mod options;
/// Builds the alphabet for a set of options and samples passwords from it.
pub mod password_generator;
/// Heuristic strength score and the four level classification.
pub mod strength;
/// The state and events of one password generator, independent of how it's rendered.
pub mod widget;
pub mod clipboard;
/// Reading and saving the default options.
pub mod settings;

pub mod error;

pub use error::{Error, Result};

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
mod test_helpers;
