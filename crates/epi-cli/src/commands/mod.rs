//! CLI subcommand implementations.

pub mod completion;
pub mod facts;
pub mod report;
pub mod verify;
pub mod viewer;

use anyhow::Context;
use anyhow::Result;
use epi_core::Verified;
use std::path::Path;

use crate::error::convert_verify_error;

/// Reads and verifies a container file, converting failures into contextual
/// CLI errors.
fn load_verified(file: &Path) -> Result<Verified> {
    let bytes = std::fs::read(file)
        .with_context(|| format!("failed to read '{}'", file.display()))?;
    epi_core::verify_container(&bytes).map_err(|e| convert_verify_error(&e, file))
}
