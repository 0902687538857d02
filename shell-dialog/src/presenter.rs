use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{DialogConfig, OpenSelection, SaveSelection};
use crate::error::FileDialogError;

/// The side that actually shows a dialog.
///
/// Implementations block until the user closes the dialog. Cancellation is
/// reported as an empty selection, never as an error.
pub trait DialogPresenter {
    /// Shows an open dialog described by `config`.
    fn show_open(&mut self, config: &DialogConfig) -> Result<OpenSelection, FileDialogError>;

    /// Shows a save dialog described by `config`.
    fn show_save(&mut self, config: &DialogConfig) -> Result<SaveSelection, FileDialogError>;
}

impl<P: DialogPresenter + ?Sized> DialogPresenter for Box<P> {
    fn show_open(&mut self, config: &DialogConfig) -> Result<OpenSelection, FileDialogError> {
        (**self).show_open(config)
    }

    fn show_save(&mut self, config: &DialogConfig) -> Result<SaveSelection, FileDialogError> {
        (**self).show_save(config)
    }
}

/// Shares one presenter between several sessions of the same thread.
impl<P: DialogPresenter + ?Sized> DialogPresenter for Rc<RefCell<P>> {
    fn show_open(&mut self, config: &DialogConfig) -> Result<OpenSelection, FileDialogError> {
        self.borrow_mut().show_open(config)
    }

    fn show_save(&mut self, config: &DialogConfig) -> Result<SaveSelection, FileDialogError> {
        self.borrow_mut().show_save(config)
    }
}
