use crate::codec::{encode_filters, encode_places};
use crate::config::FilterEntry;
use crate::places::default_place_paths;

/// Initial values of a session's live fields.
///
/// Text fields hold what a user would type: blank means "not set". Option
/// defaults come from the dialog variant, not from here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionDefaults {
    /// Initial folder
    pub directory: String,
    /// Pre-filled file name
    pub initial_file_name: String,
    /// Default extension
    pub default_extension: String,
    /// Filter list text, one `name|pattern` per line
    pub filters_text: String,
    /// 1-based initial filter index
    pub initial_filter_index: u32,
    /// Folder used when no recent folder exists
    pub default_directory: String,
    /// Window title
    pub title: String,
    /// Accept button label
    pub accept_button_label: String,
    /// File name box label
    pub file_name_label: String,
    /// Additional places text, one path per line
    pub places_text: String,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            directory: String::new(),
            initial_file_name: String::new(),
            default_extension: String::new(),
            filters_text: encode_filters(&default_filters()),
            initial_filter_index: 1,
            default_directory: String::new(),
            title: String::new(),
            accept_button_label: String::new(),
            file_name_label: String::new(),
            places_text: encode_places(default_place_paths()),
        }
    }
}

impl SessionDefaults {
    /// Defaults with empty filter and place lists.
    pub fn empty() -> Self {
        Self {
            filters_text: String::new(),
            places_text: String::new(),
            ..Self::default()
        }
    }

    /// Replace the filter text
    pub fn filters_text(mut self, text: impl Into<String>) -> Self {
        self.filters_text = text.into();
        self
    }
    /// Replace the places text
    pub fn places_text(mut self, text: impl Into<String>) -> Self {
        self.places_text = text.into();
        self
    }
    /// Replace the initial filter index
    pub fn initial_filter_index(mut self, index: u32) -> Self {
        self.initial_filter_index = index;
        self
    }
    /// Replace the initial folder
    pub fn directory(mut self, dir: impl Into<String>) -> Self {
        self.directory = dir.into();
        self
    }
    /// Replace the window title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Filters offered before the user edits anything.
pub fn default_filters() -> Vec<FilterEntry> {
    vec![
        FilterEntry::new("Image files", "*.png;*.jpg;*.gif;*.bmp"),
        FilterEntry::new("Text files", "*.txt;*.text;"),
        FilterEntry::new("All files", "*.*"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_filters;

    #[test]
    fn default_filter_text_parses_back() {
        let d = SessionDefaults::default();
        assert_eq!(parse_filters(&d.filters_text), default_filters());
        assert_eq!(d.initial_filter_index, 1);
    }

    #[test]
    fn empty_defaults_have_no_lists() {
        let d = SessionDefaults::empty();
        assert!(d.filters_text.is_empty());
        assert!(d.places_text.is_empty());
    }
}
