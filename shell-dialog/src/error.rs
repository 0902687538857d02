use thiserror::Error;

/// Errors a presenter may report back through an envelope.
///
/// Cancellation is never an error: a cancelled dialog is an empty selection.
#[derive(Error, Debug)]
pub enum FileDialogError {
    /// The dialog host failed while showing the picker; displays the host's
    /// message as is
    #[error("{0}")]
    Host(String),
    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The presenter rejected the configuration
    #[error("invalid dialog configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn host_message_is_shown_verbatim() {
        let err = FileDialogError::Host("access denied".into());
        assert_eq!(err.to_string(), "access denied");
    }

    #[test]
    fn other_variants_carry_context() {
        let io = FileDialogError::from(std::io::Error::other("portal closed"));
        assert_eq!(io.to_string(), "io error: portal closed");
        let cfg = FileDialogError::InvalidConfig("Save config sent to the Open dialog".into());
        assert_eq!(
            cfg.to_string(),
            "invalid dialog configuration: Save config sent to the Open dialog"
        );
    }
}
