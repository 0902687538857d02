#![warn(missing_docs)]
//! Request/response bridge between a dialog view-model and a native file
//! picker.
//!
//! A [`FileDialogSession`] holds the live settings of one dialog (folders,
//! file name, about twenty behavior flags, labels, plus filter and place lists
//! authored as text). Triggering it snapshots those settings into an
//! immutable [`DialogConfig`], hands it to the registered presenter through a
//! synchronous [`Interaction`] channel, and turns the answer into display text
//! and an optional filter index.
//!
//! Two presenters:
//! - Native (via `rfd`, feature `native-rfd`) for OS dialogs
//! - Any [`DialogPresenter`] implementation, e.g. a scripted one in tests
//!
//! Everything here is single-threaded: sessions, properties and channels are
//! `!Send` and must stay on the thread that created them.

mod codec;
mod config;
mod defaults;
mod disposables;
mod envelope;
mod error;
mod gate;
mod interaction;
#[cfg(feature = "native-rfd")]
mod native;
mod options;
mod panel;
mod places;
mod presenter;
mod projector;
mod property;
mod request;
mod session;

pub use codec::{encode_filters, encode_places, parse_filters, parse_places};
pub use config::{
    DialogConfig, FilterEntry, OpenSelection, SaveSelection, Selection, non_blank,
};
pub use defaults::{SessionDefaults, default_filters};
pub use disposables::Disposables;
pub use envelope::{Envelope, OpenEnvelope, SaveEnvelope};
pub use error::FileDialogError;
pub use gate::Gate;
pub use interaction::{HandlerId, Interaction};
#[cfg(feature = "native-rfd")]
pub use native::RfdPresenter;
pub use options::{DialogKind, DialogOptions};
pub use panel::DialogPanel;
pub use places::{PlaceEntry, PlaceOrder, default_place_paths};
pub use presenter::DialogPresenter;
pub use projector::{CANCELLED, NO_RESULT, Outcome, Projection, project};
pub use property::{Property, ReadOnlyProperty, SubscriptionId};
pub use request::DialogFields;
pub use session::{
    DialogVariant, FileDialogSession, OpenFile, OpenFileSession, SaveFile, SaveFileSession,
    VIEW_ERROR_BLOCKER,
};
