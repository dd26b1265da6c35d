//! Rendering finished rounds.

pub mod impls;
pub mod traits;
pub mod types;
