use std::path::PathBuf;

use thiserror::Error;
use write_fonts::read::ReadError;

#[derive(Debug, Error)]
pub enum RecolorError {
    #[error("Font file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("Failed to parse font: {0}")]
    Parse(#[from] ReadError),
    #[error("Font has no CPAL color palette and can't be recolored")]
    MissingPalette,
    #[error("Font CPAL color palette has no entries")]
    EmptyPalette,
    #[error("Failed to rebuild font: {0}")]
    Assemble(#[from] write_fonts::BuilderError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
