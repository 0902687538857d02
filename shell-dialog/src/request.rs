use indexmap::IndexMap;
use uuid::Uuid;

use crate::codec::{parse_filters, parse_places};
use crate::config::{DialogConfig, non_blank};
use crate::defaults::SessionDefaults;
use crate::disposables::Disposables;
use crate::options::{DialogKind, DialogOptions};
use crate::property::Property;

/// Live, independently settable inputs of a dialog session.
///
/// Text fields are stored as typed; normalization and list parsing happen
/// only when a snapshot is built.
#[derive(Debug)]
pub struct DialogFields {
    kind: DialogKind,
    pub(crate) directory: Property<String>,
    pub(crate) initial_file_name: Property<String>,
    pub(crate) default_extension: Property<String>,
    pub(crate) filters: Property<String>,
    pub(crate) initial_filter_index: Property<u32>,
    pub(crate) default_directory: Property<String>,
    pub(crate) options: IndexMap<DialogOptions, Property<bool>>,
    pub(crate) title: Property<String>,
    pub(crate) accept_button_label: Property<String>,
    pub(crate) file_name_label: Property<String>,
    pub(crate) additional_places: Property<String>,
}

impl DialogFields {
    /// Seeds fields for `kind`; every property is registered in `disposables`.
    pub fn new(
        kind: DialogKind,
        defaults: &SessionDefaults,
        disposables: &mut Disposables,
    ) -> Self {
        let text = |value: &str, bag: &mut Disposables| {
            let p = Property::new(value.to_string());
            bag.add_property(&p);
            p
        };

        let directory = text(&defaults.directory, disposables);
        let initial_file_name = text(&defaults.initial_file_name, disposables);
        let default_extension = text(&defaults.default_extension, disposables);
        let filters = text(&defaults.filters_text, disposables);
        let initial_filter_index = Property::new(defaults.initial_filter_index);
        disposables.add_property(&initial_filter_index);
        let default_directory = text(&defaults.default_directory, disposables);

        let enabled = kind.default_options();
        let mut options = IndexMap::new();
        for flag in kind.supported_options().iter() {
            let p = Property::new(enabled.contains(flag));
            disposables.add_property(&p);
            options.insert(flag, p);
        }

        let title = text(&defaults.title, disposables);
        let accept_button_label = text(&defaults.accept_button_label, disposables);
        let file_name_label = text(&defaults.file_name_label, disposables);
        let additional_places = text(&defaults.places_text, disposables);

        Self {
            kind,
            directory,
            initial_file_name,
            default_extension,
            filters,
            initial_filter_index,
            default_directory,
            options,
            title,
            accept_button_label,
            file_name_label,
            additional_places,
        }
    }

    /// Dialog variant the fields describe.
    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    /// Currently enabled option flags.
    pub fn current_options(&self) -> DialogOptions {
        self.options
            .iter()
            .filter(|(_, p)| p.get())
            .fold(DialogOptions::empty(), |acc, (flag, _)| acc | *flag)
    }

    /// Builds a config snapshot from the current values.
    ///
    /// Identical field values always produce an identical snapshot.
    pub fn snapshot(&self, session_id: Uuid) -> DialogConfig {
        DialogConfig {
            kind: self.kind,
            directory: normalized(&self.directory),
            initial_file_name: normalized(&self.initial_file_name),
            default_extension: normalized(&self.default_extension),
            filters: self.filters.with(|s| parse_filters(s)),
            initial_filter_index: self.initial_filter_index.get(),
            default_directory: normalized(&self.default_directory),
            session_id,
            options: self.current_options(),
            title: normalized(&self.title),
            accept_button_label: normalized(&self.accept_button_label),
            file_name_label: normalized(&self.file_name_label),
            additional_places: self.additional_places.with(|s| parse_places(s)),
        }
    }
}

fn normalized(text: &Property<String>) -> Option<String> {
    text.with(|s| non_blank(Some(s.as_str())))
}
