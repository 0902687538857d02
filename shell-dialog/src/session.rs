//! View-model for one dialog configuration panel.
//!
//! A [`FileDialogSession`] owns every live input of a dialog as an observable
//! [`Property`], guards its trigger with a [`Gate`], and turns a trigger into a
//! synchronous round trip through its [`Interaction`] channel:
//!
//! 1. snapshot the inputs into a [`DialogConfig`],
//! 2. raise an [`Envelope`] carrying it,
//! 3. project whatever the presenter wrote back into two output properties.

use std::marker::PhantomData;
use std::rc::Rc;

use uuid::Uuid;

use crate::config::{DialogConfig, OpenSelection, SaveSelection, Selection};
use crate::defaults::SessionDefaults;
use crate::disposables::Disposables;
use crate::envelope::Envelope;
use crate::error::FileDialogError;
use crate::gate::Gate;
use crate::interaction::{HandlerId, Interaction};
use crate::options::{DialogKind, DialogOptions};
use crate::presenter::DialogPresenter;
use crate::projector::{Outcome, project};
use crate::property::{Property, ReadOnlyProperty};
use crate::request::DialogFields;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Name of the blocker fed by [`FileDialogSession::has_view_error`].
pub const VIEW_ERROR_BLOCKER: &str = "view-error";

/// Compile-time selector of the open or save variant.
pub trait DialogVariant: 'static {
    /// Runtime tag of the variant
    const KIND: DialogKind;
    /// What the presenter returns for this variant
    type Selection: Selection + 'static;

    /// Forwards a request to the matching presenter method.
    fn present(
        presenter: &mut dyn DialogPresenter,
        config: &DialogConfig,
    ) -> Result<Self::Selection, FileDialogError>;
}

/// Open dialog variant.
#[derive(Debug)]
pub enum OpenFile {}

/// Save dialog variant.
#[derive(Debug)]
pub enum SaveFile {}

impl DialogVariant for OpenFile {
    const KIND: DialogKind = DialogKind::Open;
    type Selection = OpenSelection;

    fn present(
        presenter: &mut dyn DialogPresenter,
        config: &DialogConfig,
    ) -> Result<OpenSelection, FileDialogError> {
        presenter.show_open(config)
    }
}

impl DialogVariant for SaveFile {
    const KIND: DialogKind = DialogKind::Save;
    type Selection = SaveSelection;

    fn present(
        presenter: &mut dyn DialogPresenter,
        config: &DialogConfig,
    ) -> Result<SaveSelection, FileDialogError> {
        presenter.show_save(config)
    }
}

/// Session of an open dialog.
pub type OpenFileSession = FileDialogSession<OpenFile>;
/// Session of a save dialog.
pub type SaveFileSession = FileDialogSession<SaveFile>;

/// View-model owning the live state of one dialog configuration panel.
pub struct FileDialogSession<V: DialogVariant> {
    session_id: Uuid,
    show_request: Rc<Interaction<Envelope<V::Selection>>>,
    has_view_error: Property<bool>,
    gate: Gate,
    fields: DialogFields,
    result_items: Property<Option<String>>,
    result_filter_index: Property<Option<u32>>,
    disposables: Disposables,
    _variant: PhantomData<V>,
}

impl<V: DialogVariant> std::fmt::Debug for FileDialogSession<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDialogSession")
            .field("kind", &V::KIND)
            .field("session_id", &self.session_id)
            .field("gate", &self.gate)
            .field("disposables", &self.disposables)
            .finish()
    }
}

impl<V: DialogVariant> Default for FileDialogSession<V> {
    fn default() -> Self {
        Self::new(&SessionDefaults::default())
    }
}

impl<V: DialogVariant> FileDialogSession<V> {
    /// Creates a session seeded from `defaults` with a fresh session id.
    pub fn new(defaults: &SessionDefaults) -> Self {
        Self::with_session_id(defaults, Uuid::new_v4())
    }

    /// Creates a session with a caller-chosen session id.
    pub fn with_session_id(defaults: &SessionDefaults, session_id: Uuid) -> Self {
        let mut disposables = Disposables::new();

        let show_request: Rc<Interaction<Envelope<V::Selection>>> = Rc::new(Interaction::new());
        // registered first so the channel is released last
        let channel = Rc::clone(&show_request);
        disposables.add(move || channel.clear());

        let has_view_error = Property::new(false);
        disposables.add_property(&has_view_error);

        let gate = Gate::new();
        let sub = gate.add_blocker(VIEW_ERROR_BLOCKER, &has_view_error);
        disposables.add_subscription(&has_view_error, sub);

        let fields = DialogFields::new(V::KIND, defaults, &mut disposables);

        let result_filter_index = Property::new(None);
        disposables.add_property(&result_filter_index);
        let result_items = Property::new(None);
        disposables.add_property(&result_items);

        #[cfg(feature = "tracing")]
        debug!(kind = ?V::KIND, %session_id, "dialog session created");

        Self {
            session_id,
            show_request,
            has_view_error,
            gate,
            fields,
            result_items,
            result_filter_index,
            disposables,
            _variant: PhantomData,
        }
    }

    /// Identifier the host uses to persist dialog UI state; fixed for the session.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Dialog variant.
    pub fn kind(&self) -> DialogKind {
        V::KIND
    }

    /// View-side validation error; while `true` the trigger is disabled.
    pub fn has_view_error(&self) -> &Property<bool> {
        &self.has_view_error
    }

    /// Adds another named condition that disables the trigger while `true`.
    pub fn add_blocker(&mut self, name: impl Into<String>, source: &Property<bool>) {
        let sub = self.gate.add_blocker(name, source);
        self.disposables.add_subscription(source, sub);
    }

    /// Whether the trigger is currently enabled.
    pub fn can_show(&self) -> ReadOnlyProperty<bool> {
        self.gate.enabled()
    }

    /// Names of the conditions currently disabling the trigger.
    pub fn active_blockers(&self) -> Vec<String> {
        self.gate.active_blockers()
    }

    /// Initial folder.
    pub fn directory(&self) -> &Property<String> {
        &self.fields.directory
    }
    /// Pre-filled file name.
    pub fn initial_file_name(&self) -> &Property<String> {
        &self.fields.initial_file_name
    }
    /// Default extension.
    pub fn default_extension(&self) -> &Property<String> {
        &self.fields.default_extension
    }
    /// Filter list text, one `name|pattern` per line.
    pub fn filters(&self) -> &Property<String> {
        &self.fields.filters
    }
    /// 1-based initial filter index.
    pub fn initial_filter_index(&self) -> &Property<u32> {
        &self.fields.initial_filter_index
    }
    /// Folder used when no recent folder exists.
    pub fn default_directory(&self) -> &Property<String> {
        &self.fields.default_directory
    }
    /// Window title.
    pub fn title(&self) -> &Property<String> {
        &self.fields.title
    }
    /// Accept button label.
    pub fn accept_button_label(&self) -> &Property<String> {
        &self.fields.accept_button_label
    }
    /// File name box label.
    pub fn file_name_label(&self) -> &Property<String> {
        &self.fields.file_name_label
    }
    /// Additional places text, one path per line.
    pub fn additional_places(&self) -> &Property<String> {
        &self.fields.additional_places
    }

    /// Live value of a single option flag, or `None` if the variant lacks it.
    pub fn option(&self, flag: DialogOptions) -> Option<&Property<bool>> {
        self.fields.options.get(&flag)
    }

    /// All option flags of the variant with their live values, in flag order.
    pub fn options(&self) -> impl Iterator<Item = (DialogOptions, &Property<bool>)> {
        self.fields.options.iter().map(|(flag, p)| (*flag, p))
    }

    /// Text of the last result.
    pub fn result_items(&self) -> ReadOnlyProperty<Option<String>> {
        self.result_items.read_only()
    }

    /// Filter index of the last result.
    pub fn result_filter_index(&self) -> ReadOnlyProperty<Option<u32>> {
        self.result_filter_index.read_only()
    }

    /// Channel the presenter listens on. Register one handler only.
    pub fn show_request(&self) -> &Interaction<Envelope<V::Selection>> {
        &self.show_request
    }

    /// Registers `presenter` as the handler of [`Self::show_request`].
    pub fn attach_presenter<P>(&self, mut presenter: P) -> HandlerId
    where
        P: DialogPresenter + 'static,
    {
        self.show_request.register(move |envelope| {
            let outcome = V::present(&mut presenter, envelope.config());
            envelope.complete(outcome);
        })
    }

    /// Snapshot of the current inputs.
    pub fn build_config(&self) -> DialogConfig {
        self.fields.snapshot(self.session_id)
    }

    /// Runs one dialog round trip and publishes its outcome.
    ///
    /// Returns `None` without doing anything when the gate is closed or the
    /// session is disposed. Presenter errors never escape: they end up as
    /// result text.
    pub fn show_dialog(&self) -> Option<Outcome> {
        if self.disposables.is_disposed() {
            return None;
        }
        if !self.gate.is_enabled() {
            #[cfg(feature = "tracing")]
            debug!(blockers = ?self.gate.active_blockers(), "dialog trigger ignored");
            return None;
        }

        let mut envelope = Envelope::new(self.build_config());
        #[cfg(feature = "tracing")]
        trace!(config = ?envelope.config(), "raising dialog request");
        self.show_request.raise(&mut envelope);

        let projection = project(&envelope);
        #[cfg(feature = "tracing")]
        debug!(outcome = ?projection.outcome, "dialog request finished");
        self.result_items.set(Some(projection.text));
        self.result_filter_index.set(projection.filter_index);
        Some(projection.outcome)
    }

    /// Releases every subscription and handler, newest first. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposables.is_disposed() {
            return;
        }
        self.disposables.dispose();
        #[cfg(feature = "tracing")]
        debug!(session_id = %self.session_id, "dialog session disposed");
    }

    /// Returns `true` once [`Self::dispose`] ran.
    pub fn is_disposed(&self) -> bool {
        self.disposables.is_disposed()
    }
}

impl<V: DialogVariant> Drop for FileDialogSession<V> {
    fn drop(&mut self) {
        self.dispose();
    }
}
