use crate::config::{DialogConfig, OpenSelection, SaveSelection};
use crate::error::FileDialogError;

/// Single-use carrier for one dialog request.
///
/// The config is fixed at construction. The presenter answers by setting
/// exactly one of a result or an error before its handler returns; an
/// envelope with neither is a broken presenter contract.
#[derive(Debug)]
pub struct Envelope<R> {
    config: DialogConfig,
    result: Option<R>,
    error: Option<FileDialogError>,
}

/// Envelope of an open dialog request.
pub type OpenEnvelope = Envelope<OpenSelection>;
/// Envelope of a save dialog request.
pub type SaveEnvelope = Envelope<SaveSelection>;

impl<R> Envelope<R> {
    /// Wraps a config snapshot in an unfulfilled envelope.
    pub fn new(config: DialogConfig) -> Self {
        Self {
            config,
            result: None,
            error: None,
        }
    }

    /// The request's config.
    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Records the dialog result (an empty selection means cancelled).
    pub fn set_result(&mut self, result: R) {
        self.result = Some(result);
    }

    /// Records a host failure.
    pub fn set_error(&mut self, error: FileDialogError) {
        self.error = Some(error);
    }

    /// Records either outcome.
    pub fn complete(&mut self, outcome: Result<R, FileDialogError>) {
        match outcome {
            Ok(r) => self.set_result(r),
            Err(e) => self.set_error(e),
        }
    }

    /// The recorded result, if any.
    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// The recorded error, if any.
    pub fn error(&self) -> Option<&FileDialogError> {
        self.error.as_ref()
    }

    /// Returns `true` once a result or an error was recorded.
    pub fn is_fulfilled(&self) -> bool {
        self.result.is_some() || self.error.is_some()
    }
}
