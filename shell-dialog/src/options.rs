use bitflags::bitflags;

bitflags! {
    /// Behavior flags forwarded to the dialog host.
    ///
    /// Every flag is independent: the model never enforces relations between
    /// them. A presenter may reject combinations it cannot honor.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DialogOptions: u32 {
        /// Only items matching the active filter can be chosen
        const STRICT_FILE_TYPES = 1 << 0;
        /// Do not change the process working directory
        const NO_CHANGE_DIRECTORY = 1 << 1;
        /// Pick folders instead of files (open only)
        const PICK_FOLDERS = 1 << 2;
        /// Only file system items can be chosen
        const FORCE_FILE_SYSTEM = 1 << 3;
        /// Any item of the shell namespace can be chosen
        const ALL_NON_STORAGE_ITEMS = 1 << 4;
        /// Skip sharing-violation and access-denied checks
        const NO_VALIDATE = 1 << 5;
        /// Allow more than one item to be chosen (open only)
        const ALLOW_MULTI_SELECT = 1 << 6;
        /// The containing folder must exist
        const PATH_MUST_EXIST = 1 << 7;
        /// The chosen item must exist
        const FILE_MUST_EXIST = 1 << 8;
        /// Ask before creating a new item
        const CREATE_PROMPT = 1 << 9;
        /// Show guidance on sharing violations
        const SHARE_AWARE = 1 << 10;
        /// Read-only items cannot be returned
        const NO_READ_ONLY_RETURN = 1 << 11;
        /// Do not test whether the item can be created
        const NO_TEST_FILE_CREATE = 1 << 12;
        /// Hide the default items of the navigation pane
        const HIDE_PINNED_PLACES = 1 << 13;
        /// Return shortcut files themselves instead of their targets
        const NO_DEREFERENCE_LINKS = 1 << 14;
        /// The accept button requires a user interaction first
        const OK_BUTTON_NEEDS_INTERACTION = 1 << 15;
        /// Do not add the chosen item to the recent documents list
        const DONT_ADD_TO_RECENT = 1 << 16;
        /// Show hidden items
        const FORCE_SHOW_HIDDEN = 1 << 17;
        /// Always show the preview pane (open only)
        const FORCE_PREVIEW_PANE_ON = 1 << 18;
        /// Ask before overwriting an existing item (save only)
        const OVERWRITE_PROMPT = 1 << 19;
    }
}

/// The two dialog variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialogKind {
    /// Choose existing items
    Open,
    /// Choose a destination for a new item
    Save,
}

impl DialogKind {
    /// Flags meaningful for this variant.
    pub fn supported_options(self) -> DialogOptions {
        match self {
            DialogKind::Open => DialogOptions::all().difference(DialogOptions::OVERWRITE_PROMPT),
            DialogKind::Save => DialogOptions::all().difference(
                DialogOptions::PICK_FOLDERS
                    | DialogOptions::ALLOW_MULTI_SELECT
                    | DialogOptions::FORCE_PREVIEW_PANE_ON,
            ),
        }
    }

    /// Flags that start out enabled for this variant.
    pub fn default_options(self) -> DialogOptions {
        match self {
            DialogKind::Open => DialogOptions::empty(),
            DialogKind::Save => DialogOptions::OVERWRITE_PROMPT,
        }
    }
}

impl DialogOptions {
    /// Looks a single flag up by name, case-insensitively, accepting
    /// either `snake_case` or `SCREAMING_SNAKE_CASE`.
    pub fn from_flag_name(name: &str) -> Option<Self> {
        Self::from_name(&name.trim().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_specific_flags() {
        let open = DialogKind::Open.supported_options();
        let save = DialogKind::Save.supported_options();
        assert!(open.contains(DialogOptions::PICK_FOLDERS | DialogOptions::ALLOW_MULTI_SELECT));
        assert!(!open.contains(DialogOptions::OVERWRITE_PROMPT));
        assert!(save.contains(DialogOptions::OVERWRITE_PROMPT | DialogOptions::DONT_ADD_TO_RECENT));
        assert!(!save.intersects(DialogOptions::FORCE_PREVIEW_PANE_ON));
        assert_eq!(open.iter().count(), 19);
        assert_eq!(save.iter().count(), 17);
    }

    #[test]
    fn defaults_per_kind() {
        assert!(DialogKind::Open.default_options().is_empty());
        assert_eq!(DialogKind::Save.default_options(), DialogOptions::OVERWRITE_PROMPT);
    }

    #[test]
    fn flag_names() {
        assert_eq!(
            DialogOptions::from_flag_name("strict_file_types"),
            Some(DialogOptions::STRICT_FILE_TYPES)
        );
        assert_eq!(
            DialogOptions::from_flag_name("OVERWRITE_PROMPT"),
            Some(DialogOptions::OVERWRITE_PROMPT)
        );
        assert_eq!(DialogOptions::from_flag_name("nope"), None);
    }
}
