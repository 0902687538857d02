use crate::config::Selection;
use crate::envelope::Envelope;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Display text for a cancelled dialog.
pub const CANCELLED: &str = "<cancelled>";
/// Display text for an envelope the presenter left unanswered.
pub const NO_RESULT: &str = "<no result>";

/// How a request ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The presenter reported an error
    HostFailure,
    /// The user closed the dialog without choosing anything
    Cancelled,
    /// The user chose one or more items
    Selected,
    /// Neither result nor error was set; a correct presenter never does this
    ContractViolation,
}

/// Display fields derived from a finished envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    /// Which branch produced the fields
    pub outcome: Outcome,
    /// Text shown to the user
    pub text: String,
    /// 1-based filter index, when the host reported one
    pub filter_index: Option<u32>,
}

/// Classifies an envelope. An error wins over a result.
pub fn project<R: Selection>(envelope: &Envelope<R>) -> Projection {
    if let Some(err) = envelope.error() {
        return Projection {
            outcome: Outcome::HostFailure,
            text: err.to_string(),
            filter_index: None,
        };
    }
    if let Some(result) = envelope.result() {
        return match result.selection_text() {
            Some(text) => Projection {
                outcome: Outcome::Selected,
                text,
                filter_index: result.filter_index(),
            },
            None => Projection {
                outcome: Outcome::Cancelled,
                text: CANCELLED.to_string(),
                filter_index: result.filter_index(),
            },
        };
    }
    #[cfg(feature = "tracing")]
    warn!(
        session = %envelope.config().session_id,
        "dialog request returned without result or error"
    );
    Projection {
        outcome: Outcome::ContractViolation,
        text: NO_RESULT.to_string(),
        filter_index: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DialogConfig, OpenSelection, SaveSelection};
    use crate::error::FileDialogError;
    use crate::options::DialogKind;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn open_env() -> Envelope<OpenSelection> {
        Envelope::new(DialogConfig::new(DialogKind::Open, Uuid::nil()))
    }

    fn save_env() -> Envelope<SaveSelection> {
        Envelope::new(DialogConfig::new(DialogKind::Save, Uuid::nil()))
    }

    #[test]
    fn error_wins_over_result() {
        let mut env = open_env();
        env.set_result(OpenSelection {
            items: vec![PathBuf::from("a")],
            filter_index: Some(3),
        });
        env.set_error(FileDialogError::Host("boom".into()));
        let p = project(&env);
        assert_eq!(p.outcome, Outcome::HostFailure);
        assert_eq!(p.text, "boom");
        assert_eq!(p.filter_index, None);
    }

    #[test]
    fn empty_open_selection_is_cancelled() {
        let mut env = open_env();
        env.set_result(OpenSelection {
            items: Vec::new(),
            filter_index: Some(2),
        });
        let p = project(&env);
        assert_eq!(p.outcome, Outcome::Cancelled);
        assert_eq!(p.text, CANCELLED);
        assert_eq!(p.filter_index, Some(2));
    }

    #[test]
    fn cancelled_save_keeps_absent_filter_index() {
        let mut env = save_env();
        env.set_result(SaveSelection::default());
        let p = project(&env);
        assert_eq!(p.outcome, Outcome::Cancelled);
        assert_eq!(p.text, CANCELLED);
        assert_eq!(p.filter_index, None);
    }

    #[test]
    fn open_selection_joins_paths() {
        let mut env = open_env();
        env.set_result(OpenSelection {
            items: vec![PathBuf::from("/x/1.png"), PathBuf::from("/x/2.png")],
            filter_index: Some(1),
        });
        let p = project(&env);
        assert_eq!(p.outcome, Outcome::Selected);
        assert_eq!(p.text, "/x/1.png\n/x/2.png");
        assert_eq!(p.filter_index, Some(1));
    }

    #[test]
    fn save_selection_is_single_path() {
        let mut env = save_env();
        env.set_result(SaveSelection {
            item: Some(PathBuf::from("/out.txt")),
            filter_index: Some(2),
        });
        let p = project(&env);
        assert_eq!(p.outcome, Outcome::Selected);
        assert_eq!(p.text, "/out.txt");
        assert_eq!(p.filter_index, Some(2));
    }

    #[test]
    fn unanswered_envelope_is_contract_violation() {
        let env = save_env();
        assert!(!env.is_fulfilled());
        let p = project(&env);
        assert_eq!(p.outcome, Outcome::ContractViolation);
        assert_eq!(p.text, NO_RESULT);
        assert_eq!(p.filter_index, None);
    }
}
