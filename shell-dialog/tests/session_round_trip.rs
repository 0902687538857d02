use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use shell_dialog::{
    CANCELLED, DialogConfig, DialogOptions, DialogPresenter, FileDialogError, FileDialogSession,
    FilterEntry, NO_RESULT, OpenFileSession, OpenSelection, Outcome, PlaceEntry, SaveFileSession,
    SaveSelection, SessionDefaults,
};

/// Presenter that records every config and answers from a queue.
#[derive(Default)]
struct Scripted {
    seen: Vec<DialogConfig>,
    open_answers: Vec<Result<OpenSelection, FileDialogError>>,
    save_answers: Vec<Result<SaveSelection, FileDialogError>>,
}

impl DialogPresenter for Scripted {
    fn show_open(&mut self, config: &DialogConfig) -> Result<OpenSelection, FileDialogError> {
        self.seen.push(config.clone());
        self.open_answers.remove(0)
    }

    fn show_save(&mut self, config: &DialogConfig) -> Result<SaveSelection, FileDialogError> {
        self.seen.push(config.clone());
        self.save_answers.remove(0)
    }
}

fn defaults() -> SessionDefaults {
    SessionDefaults::empty()
        .filters_text("Images|*.png;*.jpg\nText|*.txt\n")
        .places_text("/srv/shared\n")
}

#[test]
fn open_round_trip_through_presenter() {
    let session: OpenFileSession = FileDialogSession::new(&defaults());
    let presenter = Rc::new(RefCell::new(Scripted {
        open_answers: vec![
            Ok(OpenSelection {
                items: vec![PathBuf::from("/p/a.png"), PathBuf::from("/p/b.jpg")],
                filter_index: Some(1),
            }),
            Ok(OpenSelection {
                items: Vec::new(),
                filter_index: Some(2),
            }),
            Err(FileDialogError::Host("access denied".into())),
        ],
        ..Default::default()
    }));
    session.attach_presenter(Rc::clone(&presenter));

    session.title().set("Pick images".into());
    session.accept_button_label().set("  ".into());
    session
        .option(DialogOptions::ALLOW_MULTI_SELECT)
        .expect("open has multi-select")
        .set(true);

    assert_eq!(session.show_dialog(), Some(Outcome::Selected));
    assert_eq!(
        session.result_items().get().as_deref(),
        Some("/p/a.png\n/p/b.jpg")
    );
    assert_eq!(session.result_filter_index().get(), Some(1));

    assert_eq!(session.show_dialog(), Some(Outcome::Cancelled));
    assert_eq!(session.result_items().get().as_deref(), Some(CANCELLED));
    assert_eq!(session.result_filter_index().get(), Some(2));

    assert_eq!(session.show_dialog(), Some(Outcome::HostFailure));
    assert_eq!(
        session.result_items().get().as_deref(),
        Some("access denied")
    );
    assert_eq!(session.result_filter_index().get(), None);

    let recorded = presenter.borrow();
    let seen = &recorded.seen;
    assert_eq!(seen.len(), 3);
    let cfg = &seen[0];
    assert_eq!(cfg.title.as_deref(), Some("Pick images"));
    assert_eq!(cfg.accept_button_label, None);
    assert_eq!(
        cfg.filters,
        vec![
            FilterEntry::new("Images", "*.png;*.jpg"),
            FilterEntry::new("Text", "*.txt"),
        ]
    );
    assert_eq!(cfg.additional_places, vec![PlaceEntry::bottom("/srv/shared")]);
    assert_eq!(cfg.options, DialogOptions::ALLOW_MULTI_SELECT);
    assert!(seen.iter().all(|c| c.session_id == session.session_id()));
}

#[test]
fn save_round_trip_keeps_overwrite_prompt_default() {
    let session: SaveFileSession = FileDialogSession::new(&defaults());
    let presenter = Rc::new(RefCell::new(Scripted {
        save_answers: vec![Ok(SaveSelection {
            item: Some(PathBuf::from("/p/out.txt")),
            filter_index: Some(2),
        })],
        ..Default::default()
    }));
    session.attach_presenter(Rc::clone(&presenter));
    session.initial_file_name().set("out".into());
    session.default_extension().set("txt".into());
    session.initial_filter_index().set(2);

    assert_eq!(session.show_dialog(), Some(Outcome::Selected));
    assert_eq!(session.result_items().get().as_deref(), Some("/p/out.txt"));
    assert_eq!(session.result_filter_index().get(), Some(2));

    let recorded = presenter.borrow();
    let cfg = &recorded.seen[0];
    assert!(cfg.has(DialogOptions::OVERWRITE_PROMPT));
    assert_eq!(cfg.initial_file_name.as_deref(), Some("out"));
    assert_eq!(cfg.default_extension.as_deref(), Some("txt"));
    assert_eq!(cfg.initial_filter_index, 2);
}

#[test]
fn no_presenter_yields_no_result_sentinel() {
    let session: SaveFileSession = FileDialogSession::new(&defaults());
    assert_eq!(session.show_dialog(), Some(Outcome::ContractViolation));
    assert_eq!(session.result_items().get().as_deref(), Some(NO_RESULT));
    assert_eq!(session.result_filter_index().get(), None);
}

#[test]
fn view_error_disables_trigger_until_cleared() {
    let session: OpenFileSession = FileDialogSession::new(&defaults());
    let presenter = Rc::new(RefCell::new(Scripted {
        open_answers: vec![Ok(OpenSelection::default())],
        ..Default::default()
    }));
    session.attach_presenter(Rc::clone(&presenter));

    let flips = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&flips);
    session.can_show().subscribe(move |v| sink.borrow_mut().push(*v));

    session.has_view_error().set(true);
    assert_eq!(session.show_dialog(), None);
    assert!(presenter.borrow().seen.is_empty());

    session.has_view_error().set(false);
    assert_eq!(session.show_dialog(), Some(Outcome::Cancelled));
    assert_eq!(*flips.borrow(), vec![false, true]);
}
