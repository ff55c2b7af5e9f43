// Assessment scoring engine.
// Implements: question catalog, Big Five + RIASEC scoring, strengths, careers, narratives.
// Everything here is pure; the only I/O is in handlers.

pub mod careers;
pub mod handlers;
pub mod interests;
pub mod narrative;
pub mod questions;
pub mod scorer;
pub mod strengths;
pub mod traits;
pub mod validation;
