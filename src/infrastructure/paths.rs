//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, so paths a
//! user types (`~/Pictures/m4.png`) and paths the plugin can open differ.

use std::path::PathBuf;

const HOST_MOUNT: &str = "/host";

/// Directory for plugin-owned files such as the trace log.
///
/// Resolves to `/host/.local/share/zellij/cardealer`, which is normally
/// `~/.local/share/zellij/cardealer` on the host.
///
/// ```
/// use cardealer::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("zellij/cardealer"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_MOUNT)
        .join(".local/share/zellij")
        .join("cardealer")
}

/// Rewrites a `~`-relative path to its sandbox location.
///
/// URLs and other strings pass through untouched.
///
/// ```
/// use cardealer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/Pictures/m4.png"), "/host/Pictures/m4.png");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("https://cars.test/m4.png"), "https://cars.test/m4.png");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_MOUNT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_MOUNT}{rest}"),
        _ => path.to_string(),
    }
}

/// Inverse of [`expand_tilde`] for display: `/host/x` is shown as `~/x`.
///
/// ```
/// use cardealer::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/Pictures/m4.png"), "~/Pictures/m4.png");
/// assert_eq!(strip_host_prefix("/hostile/file"), "/hostile/file");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_MOUNT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}
