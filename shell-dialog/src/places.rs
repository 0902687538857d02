use std::path::PathBuf;

/// Where an additional place goes relative to the host's own places.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceOrder {
    /// Before the host's default places
    Top,
    /// After the host's default places
    Bottom,
}

/// A navigation shortcut shown in the dialog's places pane.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceEntry {
    /// Target folder.
    pub path: PathBuf,
    /// Placement relative to the host's places.
    pub order: PlaceOrder,
}

impl PlaceEntry {
    /// Creates a new place entry.
    pub fn new(path: impl Into<PathBuf>, order: PlaceOrder) -> Self {
        Self {
            path: path.into(),
            order,
        }
    }

    /// Convenience constructor for a place appended after the host's places.
    pub fn bottom(path: impl Into<PathBuf>) -> Self {
        Self::new(path, PlaceOrder::Bottom)
    }

    /// Convenience constructor for a place shown before the host's places.
    pub fn top(path: impl Into<PathBuf>) -> Self {
        Self::new(path, PlaceOrder::Top)
    }
}

/// Platform folders offered as additional places by default: the user's
/// roaming configuration folder and the folder applications install into.
///
/// This is a best-effort lookup and may return fewer entries when the
/// environment does not describe a folder.
pub fn default_place_paths() -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(dir) = config_dir() {
        out.push(dir);
    }
    if let Some(dir) = program_dir() {
        out.push(dir);
    }
    out
}

#[cfg(target_os = "windows")]
fn config_dir() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|h| h.join(".config")))
}

#[cfg(target_os = "windows")]
fn program_dir() -> Option<PathBuf> {
    std::env::var_os("ProgramFiles").map(PathBuf::from)
}

#[cfg(target_os = "macos")]
fn program_dir() -> Option<PathBuf> {
    Some(PathBuf::from("/Applications"))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn program_dir() -> Option<PathBuf> {
    Some(PathBuf::from("/usr/local"))
}

#[cfg(not(target_os = "windows"))]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_order() {
        assert_eq!(PlaceEntry::bottom("/a").order, PlaceOrder::Bottom);
        assert_eq!(PlaceEntry::top("/a").order, PlaceOrder::Top);
        assert_eq!(PlaceEntry::top("/a").path, PathBuf::from("/a"));
    }

    #[test]
    fn default_places_are_non_empty_paths() {
        for p in default_place_paths() {
            assert!(!p.as_os_str().is_empty());
        }
    }
}
