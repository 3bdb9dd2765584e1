//! Campaign settings supplied by the external configuration layer.

use serde::{Deserialize, Serialize};

/// Difficulty and debug knobs for one campaign session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Global force-size multiplier.
    pub multiplier: f64,
    /// Whether advanced SAM systems may be commissioned.
    pub sams: bool,
    /// Development mode: every generation roll passes and skipped turns do
    /// not punish the player.
    pub dev: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            sams: true,
            dev: false,
        }
    }
}
