//! Paths inside the Zellij plugin sandbox, where the host home directory is
//! mounted at `/host`.

use std::path::PathBuf;

/// Directory holding the plugin's trace files.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("emoji-catalog")
}

/// Maps a leading `~` to the sandboxed home directory.
///
/// ```
/// use emoji_catalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home_only() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~other/x"), "~other/x");
        assert_eq!(expand_tilde("relative/~"), "relative/~");
    }

    #[test]
    fn data_dir_is_sandboxed() {
        assert!(get_data_dir().starts_with("/host"));
        assert!(get_data_dir().ends_with("emoji-catalog"));
    }
}
