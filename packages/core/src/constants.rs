use std::env;
use std::path::PathBuf;

/// Get the path to the Cookbook directory (~/.cookbook)
pub fn cookbook_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".cookbook")
    } else {
        // Fall back to dirs crate for normal usage
        dirs::home_dir()
            .expect("Unable to get home directory")
            .join(".cookbook")
    }
}

/// Get the path to the SQLite database file (~/.cookbook/cookbook.db)
pub fn database_file() -> PathBuf {
    cookbook_dir().join("cookbook.db")
}
