// File: crates/chart-engine/src/error.rs
// Summary: Error type for the fallible edges of the engine (surface, readback, encoding, IO).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create raster surface of {width}x{height}")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
