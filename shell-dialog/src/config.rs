use std::path::PathBuf;

use uuid::Uuid;

use crate::options::{DialogKind, DialogOptions};
use crate::places::PlaceEntry;

/// File type filter (e.g. "Images" -> "*.png;*.jpg").
///
/// Entries are order-significant and need not be unique: the order defines
/// both display order and the meaning of 1-based filter indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterEntry {
    /// Filter display name
    pub display_name: String,
    /// Semicolon-separated wildcard patterns, passed to the host verbatim
    pub pattern: String,
}

impl FilterEntry {
    /// Create a filter from a display name and a pattern.
    pub fn new(display_name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            pattern: pattern.into(),
        }
    }
}

impl From<(&str, &str)> for FilterEntry {
    fn from(value: (&str, &str)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Immutable snapshot describing one dialog invocation.
///
/// Optional strings are never `Some("")`: blank inputs are normalized to
/// `None` when the snapshot is built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogConfig {
    /// Dialog variant
    pub kind: DialogKind,
    /// Initial folder
    pub directory: Option<String>,
    /// File name pre-filled in the name box
    pub initial_file_name: Option<String>,
    /// Extension appended when the user types none
    pub default_extension: Option<String>,
    /// File type filters, in display order
    pub filters: Vec<FilterEntry>,
    /// 1-based index into `filters` of the initially selected filter
    pub initial_filter_index: u32,
    /// Folder used when no recent folder exists
    pub default_directory: Option<String>,
    /// Identifier the host uses to persist per-dialog UI state (last folder, geometry)
    pub session_id: Uuid,
    /// Option flags
    pub options: DialogOptions,
    /// Window title
    pub title: Option<String>,
    /// Accept button label
    pub accept_button_label: Option<String>,
    /// Label of the file name box
    pub file_name_label: Option<String>,
    /// Extra navigation places, in list order
    pub additional_places: Vec<PlaceEntry>,
}

impl DialogConfig {
    /// Create a config for `kind` with the variant's default options.
    pub fn new(kind: DialogKind, session_id: Uuid) -> Self {
        Self {
            kind,
            directory: None,
            initial_file_name: None,
            default_extension: None,
            filters: Vec::new(),
            initial_filter_index: 1,
            default_directory: None,
            session_id,
            options: kind.default_options(),
            title: None,
            accept_button_label: None,
            file_name_label: None,
            additional_places: Vec::new(),
        }
    }

    /// Set the initial folder (blank clears it)
    pub fn directory(mut self, dir: impl AsRef<str>) -> Self {
        self.directory = non_blank(Some(dir.as_ref()));
        self
    }
    /// Set the file name pre-filled in the name box (blank clears it)
    pub fn initial_file_name(mut self, name: impl AsRef<str>) -> Self {
        self.initial_file_name = non_blank(Some(name.as_ref()));
        self
    }
    /// Set the extension appended when the user types none (blank clears it)
    pub fn default_extension(mut self, ext: impl AsRef<str>) -> Self {
        self.default_extension = non_blank(Some(ext.as_ref()));
        self
    }
    /// Append file type filters
    pub fn filters<I, F>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FilterEntry>,
    {
        self.filters.extend(filters.into_iter().map(Into::into));
        self
    }
    /// Set the 1-based index of the initially selected filter
    pub fn initial_filter_index(mut self, index: u32) -> Self {
        self.initial_filter_index = index;
        self
    }
    /// Set the folder used when no recent folder exists (blank clears it)
    pub fn default_directory(mut self, dir: impl AsRef<str>) -> Self {
        self.default_directory = non_blank(Some(dir.as_ref()));
        self
    }
    /// Replace the option flags, masked to what the variant supports
    pub fn options(mut self, options: DialogOptions) -> Self {
        self.options = options & self.kind.supported_options();
        self
    }
    /// Set the window title (blank clears it)
    pub fn title(mut self, title: impl AsRef<str>) -> Self {
        self.title = non_blank(Some(title.as_ref()));
        self
    }
    /// Set the accept button label (blank clears it)
    pub fn accept_button_label(mut self, label: impl AsRef<str>) -> Self {
        self.accept_button_label = non_blank(Some(label.as_ref()));
        self
    }
    /// Set the label of the file name box (blank clears it)
    pub fn file_name_label(mut self, label: impl AsRef<str>) -> Self {
        self.file_name_label = non_blank(Some(label.as_ref()));
        self
    }
    /// Append navigation places
    pub fn additional_places<I>(mut self, places: I) -> Self
    where
        I: IntoIterator<Item = PlaceEntry>,
    {
        self.additional_places.extend(places);
        self
    }

    /// Returns `true` if every flag in `flag` is set
    pub fn has(&self, flag: DialogOptions) -> bool {
        self.options.contains(flag)
    }
    /// Folder the host should start in: the initial folder, else the default one.
    pub fn start_directory(&self) -> Option<PathBuf> {
        self.directory
            .as_deref()
            .or(self.default_directory.as_deref())
            .map(PathBuf::from)
    }
}

/// Result of an open dialog. An empty `items` list means cancelled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenSelection {
    /// Chosen items, in host order
    pub items: Vec<PathBuf>,
    /// 1-based index of the filter active on close
    pub filter_index: Option<u32>,
}

/// Result of a save dialog. `item == None` means cancelled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveSelection {
    /// Chosen destination
    pub item: Option<PathBuf>,
    /// 1-based index of the filter active on close
    pub filter_index: Option<u32>,
}

/// Common view over both selection types, used when projecting results.
pub trait Selection {
    /// Display text for a non-empty selection, `None` when cancelled.
    fn selection_text(&self) -> Option<String>;
    /// 1-based filter index reported by the host.
    fn filter_index(&self) -> Option<u32>;
}

impl Selection for OpenSelection {
    fn selection_text(&self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .items
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        Some(lines.join("\n"))
    }

    fn filter_index(&self) -> Option<u32> {
        self.filter_index
    }
}

impl Selection for SaveSelection {
    fn selection_text(&self) -> Option<String> {
        self.item
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
    }

    fn filter_index(&self) -> Option<u32> {
        self.filter_index
    }
}

/// Blank (empty or whitespace-only) input becomes `None`; anything else is
/// kept verbatim, surrounding whitespace included.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}
