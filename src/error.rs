//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the lissa crate.
#[derive(Debug)]
pub enum LissaError {
    /// GPU context initialization failure, fatal at construction.
    Gpu(RenderContextError),
    /// WGSL shader composition failure.
    Shader(String),
    /// Unrecognized view mode name. Reported to the caller; scene state
    /// is unchanged.
    InvalidViewMode(String),
    /// Unrecognized viewpoint name. Reported to the caller; camera state
    /// is unchanged.
    InvalidViewpoint(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for LissaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Shader(msg) => write!(f, "shader composition error: {msg}"),
            Self::InvalidViewMode(name) => {
                write!(f, "unknown view mode: {name:?} (expected \"single\" or \"group\")")
            }
            Self::InvalidViewpoint(name) => {
                write!(f, "unknown viewpoint: {name:?}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for LissaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for LissaError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for LissaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
