//! Environment loading

use std::path::PathBuf;

/// Name of the variable holding the Postgres connection string.
pub const CONNECTION_STRING_ENV: &str = "CONNECTION_STRING";

/// Load `.env` from the current directory (or the nearest parent).
///
/// Variables already set in the environment win. Returns the file that was
/// loaded; a missing file is the normal case in production.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
