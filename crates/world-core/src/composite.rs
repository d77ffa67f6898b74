//! Multi-part operation sequencing with compensation.
//!
//! A composite operation is an ordered list of commands, each paired
//! with its structural inverse. Creation applies them in order and, when
//! part k fails, compensates parts k-1..1 in reverse before surfacing
//! the error. Updates re-apply forward without compensation: the remote
//! protocol is idempotent-by-overwrite, and a half-applied update is
//! deliberately left in place rather than rolled back.

use tracing::warn;

use crate::error::{Error, Result, Warning};
use crate::transport::CommandExecutor;

/// One step of a composite operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    /// Names the part in error and warning messages, e.g. "right half".
    pub label: &'static str,
    pub apply: String,
    pub undo: String,
}

impl PlannedCommand {
    pub fn new(label: &'static str, apply: String, undo: String) -> Self {
        Self { label, apply, undo }
    }
}

/// Apply all parts in order; on failure, undo the already-applied parts
/// in reverse and return the original error naming the failed part.
/// Compensation failures are demoted to log warnings.
pub fn apply_all(
    tx: &mut dyn CommandExecutor,
    parts: &[PlannedCommand],
    context: &str,
) -> Result<()> {
    for (applied, part) in parts.iter().enumerate() {
        if let Err(source) = tx.execute(&part.apply) {
            for done in parts[..applied].iter().rev() {
                if let Err(undo_err) = tx.execute(&done.undo) {
                    warn!(
                        part = done.label,
                        error = %undo_err,
                        "compensation command failed"
                    );
                }
            }
            return Err(Error::transport(format!("{context} {}", part.label), source));
        }
    }
    Ok(())
}

/// Apply all parts in order without compensation. A failure surfaces
/// immediately and earlier parts stay applied.
pub fn apply_forward(
    tx: &mut dyn CommandExecutor,
    parts: &[PlannedCommand],
    context: &str,
) -> Result<()> {
    for part in parts {
        tx.execute(&part.apply)
            .map_err(|source| Error::transport(format!("{context} {}", part.label), source))?;
    }
    Ok(())
}

/// Issue every part's inverse in reverse order, collecting failures as
/// warnings. Used at removal, which never hard-fails.
pub fn undo_all(
    tx: &mut dyn CommandExecutor,
    parts: &[PlannedCommand],
    context: &str,
) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for part in parts.iter().rev() {
        if let Err(err) = tx.execute(&part.undo) {
            warn!(part = part.label, error = %err, "removal command failed");
            warnings.push(Warning::new(format!("{context} {}", part.label), err));
        }
    }
    warnings
}
