// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report persistence.

use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Write `report` to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, report)?;
    info!(path = %path.display(), bytes = report.len(), "report written");
    Ok(())
}
