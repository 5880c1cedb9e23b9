//! Command error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Engine error: {0}")]
    Engine(#[from] lumen_engine::EngineError),
}
