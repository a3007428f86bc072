use std::path::PathBuf;

use crate::types::TICKETDESK_DIR;

/// Returns the root ticketdesk directory path.
///
/// Resolution order:
/// 1. `TICKETDESK_ROOT` environment variable (if set)
/// 2. Current working directory + `.ticketdesk`
pub fn ticketdesk_root() -> PathBuf {
    if let Ok(root) = std::env::var("TICKETDESK_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(TICKETDESK_DIR)
    }
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    ticketdesk_root().join("config.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_root_default() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::remove_var("TICKETDESK_ROOT") };
        assert_eq!(ticketdesk_root(), PathBuf::from(".ticketdesk"));
        assert_eq!(config_path(), PathBuf::from(".ticketdesk/config.yaml"));
    }

    #[test]
    #[serial]
    fn test_root_with_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var("TICKETDESK_ROOT", "/custom/path/.ticketdesk") };
        assert_eq!(
            config_path(),
            PathBuf::from("/custom/path/.ticketdesk/config.yaml")
        );
        unsafe { std::env::remove_var("TICKETDESK_ROOT") };
    }
}
