//! Content-based hashing for run IDs.

use ff_project::schema::RunConfigDef;
use sha2::{Digest, Sha256};

/// Hash everything that changes the stored output. The display name and the
/// sweep section do not.
pub fn compute_run_id(config: &RunConfigDef, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let mut keyed = config.clone();
    keyed.name.clear();
    keyed.sweep = None;
    let config_json = serde_json::to_string(&keyed).unwrap_or_default();
    hasher.update(config_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
