//! Domain Layer
//!
//! Document models and the repository traits the application layer
//! depends on.

pub mod entities;

pub use entities::*;
