//! Engine error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Engine session has terminated")]
    SessionTerminated,

    #[error("Engine backend failure: {0}")]
    Backend(String),
}
