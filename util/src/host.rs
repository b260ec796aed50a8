//! Host platform utility functions

use std::path::PathBuf;

/// Name of the environment variable pointing at the root of the courier
/// software checkout. Parameter files and session directories are resolved
/// relative to this root.
pub const SW_ROOT_ENV_VAR: &str = "COURIER_SW_ROOT";

/// Get the root directory of the courier software.
///
/// Returns `Err` if the root environment variable is not set.
pub fn get_courier_sw_root() -> Result<PathBuf, std::env::VarError> {
    std::env::var(SW_ROOT_ENV_VAR).map(PathBuf::from)
}
