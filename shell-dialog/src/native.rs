//! Native (rfd) presenter.
//!
//! [`RfdPresenter`] shows the OS-native dialog through the `rfd` crate and
//! blocks until it closes.
//!
//! Notes
//! - Each filter pattern is split on `;` and only plain `*.ext` tokens are
//!   forwarded; a filter with no plain token (e.g. `*.*`) is skipped.
//! - `directory` wins over `default_directory` as the start folder.
//! - rfd does not report the active filter, so `filter_index` is always `None`.
//! - Flags, labels and additional places that rfd cannot express are ignored
//!   (reported at debug level when tracing is enabled).
use std::path::PathBuf;

use crate::config::{DialogConfig, OpenSelection, SaveSelection};
use crate::error::FileDialogError;
use crate::options::{DialogKind, DialogOptions};
use crate::presenter::DialogPresenter;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Flags rfd honors directly.
#[cfg(feature = "tracing")]
const HONORED: DialogOptions =
    DialogOptions::PICK_FOLDERS.union(DialogOptions::ALLOW_MULTI_SELECT);

/// Presenter backed by the platform's native file dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct RfdPresenter;

impl RfdPresenter {
    /// Creates the presenter.
    pub fn new() -> Self {
        Self
    }
}

fn to_rfd(config: &DialogConfig) -> rfd::FileDialog {
    let mut d = rfd::FileDialog::new();
    if let Some(dir) = config.start_directory() {
        d = d.set_directory(dir);
    }
    if let Some(name) = &config.initial_file_name {
        d = d.set_file_name(name);
    }
    if let Some(title) = &config.title {
        d = d.set_title(title);
    }
    for f in &config.filters {
        let exts = plain_extensions(&f.pattern);
        if !exts.is_empty() {
            d = d.add_filter(&f.display_name, &exts);
        }
    }
    report_ignored(config);
    d
}

fn report_ignored(config: &DialogConfig) {
    #[cfg(feature = "tracing")]
    {
        let ignored = config.options.difference(HONORED);
        if !ignored.is_empty() {
            debug!(?ignored, "rfd ignores dialog options");
        }
        if config.accept_button_label.is_some() || config.file_name_label.is_some() {
            debug!("rfd ignores custom button and label text");
        }
        if !config.additional_places.is_empty() {
            debug!(
                count = config.additional_places.len(),
                "rfd ignores additional places"
            );
        }
    }
    #[cfg(not(feature = "tracing"))]
    let _ = config;
}

fn check_kind(config: &DialogConfig, expected: DialogKind) -> Result<(), FileDialogError> {
    if config.kind != expected {
        return Err(FileDialogError::InvalidConfig(format!(
            "{:?} config sent to the {:?} dialog",
            config.kind, expected
        )));
    }
    Ok(())
}

impl DialogPresenter for RfdPresenter {
    fn show_open(&mut self, config: &DialogConfig) -> Result<OpenSelection, FileDialogError> {
        check_kind(config, DialogKind::Open)?;
        #[cfg(feature = "tracing")]
        trace!(options = ?config.options, "rfd open");
        let dialog = to_rfd(config);
        let folders = config.has(DialogOptions::PICK_FOLDERS);
        let multi = config.has(DialogOptions::ALLOW_MULTI_SELECT);
        let items: Vec<PathBuf> = match (folders, multi) {
            (false, false) => dialog.pick_file().into_iter().collect(),
            (false, true) => dialog.pick_files().unwrap_or_default(),
            (true, false) => dialog.pick_folder().into_iter().collect(),
            (true, true) => dialog.pick_folders().unwrap_or_default(),
        };
        Ok(OpenSelection {
            items,
            filter_index: None,
        })
    }

    fn show_save(&mut self, config: &DialogConfig) -> Result<SaveSelection, FileDialogError> {
        check_kind(config, DialogKind::Save)?;
        #[cfg(feature = "tracing")]
        trace!(options = ?config.options, "rfd save");
        let item = to_rfd(config)
            .save_file()
            .map(|p| with_default_extension(p, config.default_extension.as_deref()));
        Ok(SaveSelection {
            item,
            filter_index: None,
        })
    }
}

/// Appends `ext` when the chosen path has no extension of its own.
fn with_default_extension(path: PathBuf, ext: Option<&str>) -> PathBuf {
    let Some(ext) = ext.map(|e| e.trim().trim_start_matches('.')) else {
        return path;
    };
    if ext.is_empty() || path.extension().is_some() {
        return path;
    }
    path.with_extension(ext)
}

/// Plain extensions of a `;`-separated pattern, lowercased and without dots.
fn plain_extensions(pattern: &str) -> Vec<String> {
    pattern
        .split(';')
        .filter_map(plain_extension_for_native)
        .collect()
}

fn plain_extension_for_native(token: &str) -> Option<String> {
    let t = token.trim();
    let t = t.strip_prefix("*.").unwrap_or(t).trim_start_matches('.');
    if t.is_empty() || t.contains('*') || t.contains('?') {
        return None;
    }
    Some(t.to_lowercase())
}
