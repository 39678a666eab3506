use thiserror::Error;

use crate::app::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("Failed to initialise SDL: {0}")]
    Subsystem(String),
    #[error("Failed to initialise window: {0}")]
    Window(String),
    #[error("Failed to create renderer: {0}")]
    Renderer(String),
    #[error("Failed to create OpenGL context: {0}")]
    Context(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Init(#[from] InitError),
    #[error("{operation} called while {phase:?}")]
    OutOfPhase {
        operation: &'static str,
        phase: Phase,
    },
}
