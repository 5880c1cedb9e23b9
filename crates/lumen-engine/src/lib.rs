//! Lumen Engine Concept
//!
//! Traits and value objects describing what a rendering/navigation backend
//! must provide. The actual backend lives elsewhere; everything in this crate
//! is an interface the rest of the browser programs against.

mod data;
mod engine;
mod error;
mod session;

pub use data::{BrowsingData, LoadUrlFlags};
pub use engine::Engine;
pub use error::EngineError;
pub use session::EngineSession;

pub type Result<T> = std::result::Result<T, EngineError>;
