use std::cell::RefCell;
use std::rc::Rc;

use crate::defaults::SessionDefaults;
use crate::interaction::HandlerId;
use crate::presenter::DialogPresenter;
use crate::session::{FileDialogSession, OpenFileSession, SaveFileSession};

/// Top-level view-model: one open session and one save session side by side.
///
/// Each session has its own session id, so the host keeps separate UI state
/// for the two dialogs.
#[derive(Debug)]
pub struct DialogPanel {
    open: OpenFileSession,
    save: SaveFileSession,
    disposed: bool,
}

impl Default for DialogPanel {
    fn default() -> Self {
        Self::new(&SessionDefaults::default())
    }
}

impl DialogPanel {
    /// Create both sessions from the same defaults.
    pub fn new(defaults: &SessionDefaults) -> Self {
        Self {
            open: FileDialogSession::new(defaults),
            save: FileDialogSession::new(defaults),
            disposed: false,
        }
    }

    /// The open dialog session.
    pub fn open(&self) -> &OpenFileSession {
        &self.open
    }

    /// The save dialog session.
    pub fn save(&self) -> &SaveFileSession {
        &self.save
    }

    /// Mutable access to the open dialog session.
    pub fn open_mut(&mut self) -> &mut OpenFileSession {
        &mut self.open
    }

    /// Mutable access to the save dialog session.
    pub fn save_mut(&mut self) -> &mut SaveFileSession {
        &mut self.save
    }

    /// Attach one presenter to both sessions.
    pub fn attach_presenter<P>(&self, presenter: P) -> (HandlerId, HandlerId)
    where
        P: DialogPresenter + 'static,
    {
        let shared = Rc::new(RefCell::new(presenter));
        let open = self.open.attach_presenter(Rc::clone(&shared));
        let save = self.save.attach_presenter(shared);
        (open, save)
    }

    /// Dispose both sessions, the save session first.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.save.dispose();
        self.open.dispose();
    }

    /// Returns `true` once [`Self::dispose`] ran.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for DialogPanel {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DialogConfig, OpenSelection, SaveSelection};
    use crate::error::FileDialogError;
    use crate::projector::Outcome;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Counting {
        opens: usize,
        saves: usize,
    }

    impl DialogPresenter for Counting {
        fn show_open(&mut self, _: &DialogConfig) -> Result<OpenSelection, FileDialogError> {
            self.opens += 1;
            Ok(OpenSelection::default())
        }

        fn show_save(&mut self, _: &DialogConfig) -> Result<SaveSelection, FileDialogError> {
            self.saves += 1;
            Ok(SaveSelection {
                item: Some(PathBuf::from("/tmp/x")),
                filter_index: Some(3),
            })
        }
    }

    #[test]
    fn sessions_have_distinct_ids() {
        let panel = DialogPanel::new(&SessionDefaults::empty());
        assert_ne!(panel.open().session_id(), panel.save().session_id());
    }

    #[test]
    fn shared_presenter_serves_both_sessions() {
        let panel = DialogPanel::new(&SessionDefaults::empty());
        panel.attach_presenter(Counting::default());
        assert_eq!(panel.open().show_dialog(), Some(Outcome::Cancelled));
        assert_eq!(panel.save().show_dialog(), Some(Outcome::Selected));
        assert_eq!(panel.save().result_filter_index().get(), Some(3));
    }

    #[test]
    fn dispose_tears_down_both() {
        let mut panel = DialogPanel::new(&SessionDefaults::empty());
        panel.dispose();
        assert!(panel.is_disposed());
        assert!(panel.open().is_disposed());
        assert!(panel.save().is_disposed());
    }
}
