//! File dialog panel demo via shell-dialog
//! - Seeds an open and a save session from the defaults
//! - Applies `--set key=value` edits the way a bound form would
//! - Shows the dialog once and prints the projected result
//!
//! `cargo run -p shell-dialog-demos --bin file_dialog_panel -- open --set allow_multi_select=true`
//! `cargo run -p shell-dialog-demos --bin file_dialog_panel -- save --console`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use shell_dialog::{
    DialogConfig, DialogOptions, DialogPanel, DialogPresenter, DialogVariant, FileDialogError,
    FileDialogSession, OpenSelection, SaveSelection, SessionDefaults,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Which {
    Open,
    Save,
}

#[derive(Parser, Debug)]
#[command(name = "file_dialog_panel", about = "Drive a file dialog session from the command line")]
struct Args {
    /// Dialog to show
    #[arg(value_enum, default_value_t = Which::Open)]
    which: Which,

    /// Edit a live field before showing, e.g. `title=Pick` or `force_show_hidden=true`.
    /// In text values `\n` separates lines.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Simulate a view-side validation error (the trigger stays disabled)
    #[arg(long)]
    view_error: bool,

    /// Answer from stdin instead of the native dialog
    #[arg(long)]
    console: bool,
}

/// Presenter that prints the request and reads the selection from stdin.
///
/// One path per line, an empty line ends the selection. `!message` reports
/// a host failure instead.
struct ConsolePresenter;

impl ConsolePresenter {
    fn prompt(&self, config: &DialogConfig) -> Result<Vec<PathBuf>, FileDialogError> {
        let mut out = io::stdout().lock();
        writeln!(out, "--- {:?} dialog request ---", config.kind)?;
        writeln!(out, "{config:#?}")?;
        writeln!(out, "Enter paths (empty line to finish, `!msg` to fail):")?;
        out.flush()?;

        let mut items = Vec::new();
        for line in io::stdin().lock().lines() {
            let line = line?;
            if let Some(msg) = line.strip_prefix('!') {
                return Err(FileDialogError::Host(msg.trim().to_string()));
            }
            if line.trim().is_empty() {
                break;
            }
            items.push(PathBuf::from(line));
        }
        Ok(items)
    }
}

impl DialogPresenter for ConsolePresenter {
    fn show_open(&mut self, config: &DialogConfig) -> Result<OpenSelection, FileDialogError> {
        let mut items = self.prompt(config)?;
        if !config.has(DialogOptions::ALLOW_MULTI_SELECT) {
            items.truncate(1);
        }
        let filter_index = (!config.filters.is_empty()).then_some(config.initial_filter_index);
        Ok(OpenSelection {
            items,
            filter_index,
        })
    }

    fn show_save(&mut self, config: &DialogConfig) -> Result<SaveSelection, FileDialogError> {
        let item = self.prompt(config)?.into_iter().next();
        let filter_index = (!config.filters.is_empty()).then_some(config.initial_filter_index);
        Ok(SaveSelection { item, filter_index })
    }
}

fn apply_edit<V: DialogVariant>(session: &FileDialogSession<V>, edit: &str) -> Result<()> {
    let (key, raw) = edit
        .split_once('=')
        .with_context(|| format!("expected KEY=VALUE, got `{edit}`"))?;
    let value = raw.replace("\\n", "\n");
    let text = match key.trim() {
        "directory" => Some(session.directory()),
        "initial_file_name" => Some(session.initial_file_name()),
        "default_extension" => Some(session.default_extension()),
        "filters" => Some(session.filters()),
        "default_directory" => Some(session.default_directory()),
        "title" => Some(session.title()),
        "accept_button_label" => Some(session.accept_button_label()),
        "file_name_label" => Some(session.file_name_label()),
        "additional_places" => Some(session.additional_places()),
        _ => None,
    };
    if let Some(prop) = text {
        prop.set(value);
        return Ok(());
    }
    if key.trim() == "initial_filter_index" {
        let index = value
            .trim()
            .parse::<u32>()
            .with_context(|| format!("invalid filter index `{value}`"))?;
        session.initial_filter_index().set(index);
        return Ok(());
    }

    let Some(flag) = DialogOptions::from_flag_name(key) else {
        bail!("unknown field `{key}`");
    };
    let Some(prop) = session.option(flag) else {
        bail!("`{key}` is not available for the {:?} dialog", session.kind());
    };
    let on = value
        .trim()
        .parse::<bool>()
        .with_context(|| format!("invalid boolean `{value}` for `{key}`"))?;
    prop.set(on);
    Ok(())
}

fn run_session<V: DialogVariant>(session: &FileDialogSession<V>, args: &Args) -> Result<()> {
    for edit in &args.set {
        apply_edit(session, edit)?;
    }
    session.has_view_error().set(args.view_error);
    info!(
        kind = ?session.kind(),
        can_show = session.can_show().get(),
        "session ready"
    );

    match session.show_dialog() {
        None => println!("Dialog not shown (blocked by: {:?})", session.active_blockers()),
        Some(outcome) => {
            println!("Outcome: {outcome:?}");
            println!(
                "Items:\n{}",
                session.result_items().get().unwrap_or_default()
            );
            match session.result_filter_index().get() {
                Some(i) => println!("Filter index: {i}"),
                None => println!("Filter index: -"),
            }
        }
    }
    Ok(())
}

fn attach(panel: &DialogPanel, console: bool) {
    #[cfg(feature = "native-rfd")]
    if !console {
        panel.attach_presenter(shell_dialog::RfdPresenter::new());
        return;
    }
    #[cfg(not(feature = "native-rfd"))]
    let _ = console;
    panel.attach_presenter(ConsolePresenter);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut panel = DialogPanel::new(&SessionDefaults::default());
    attach(&panel, args.console);

    let res = match args.which {
        Which::Open => run_session(panel.open(), &args),
        Which::Save => run_session(panel.save(), &args),
    };
    panel.dispose();
    res
}
