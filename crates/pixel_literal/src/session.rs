//! Conversion session: the selected files, the active mode and the last output.
//!
//! Every conversion request takes a [`Ticket`] with a sequence number. Only the
//! result of the newest ticket is applied; a slower, older request finishing
//! late is dropped instead of overwriting newer output.

use crate::{process, render_error, EncodeOptions, OutputMode, Result, SourceFile};
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct State {
    selected: Vec<SourceFile>,
    mode: OutputMode,
    output: String,
}

/// Holds the selection and output of one converter front end.
///
/// `Session` is `Sync`: tickets may be run on worker threads and completed in
/// any order.
#[derive(Debug, Default)]
pub struct Session {
    options: EncodeOptions,
    latest: AtomicU64,
    state: Mutex<State>,
}

/// A snapshot of one conversion request.
#[derive(Debug, Clone)]
pub struct Ticket {
    seq: u64,
    files: Vec<SourceFile>,
    mode: OutputMode,
    options: EncodeOptions,
}

impl Ticket {
    /// Sequence number; higher is newer.
    pub fn sequence(&self) -> u64 {
        self.seq
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Run the conversion this ticket describes. Does not touch the session.
    pub fn run(&self) -> Result<String> {
        process(&self.files, self.mode, &self.options)
    }
}

impl Session {
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the selection and convert it. Returns the new output.
    pub fn select(&self, files: Vec<SourceFile>) -> String {
        self.state().selected = files;
        self.convert()
    }

    /// Press the toggle for `pressed`. See [`OutputMode::toggle`].
    ///
    /// The selection is converted again in the new mode if it is not empty.
    pub fn press(&self, pressed: OutputMode) -> String {
        let reconvert = {
            let mut state = self.state();
            state.mode = state.mode.toggle(pressed);
            !state.selected.is_empty()
        };
        if reconvert {
            self.convert()
        } else {
            self.output()
        }
    }

    /// Convert the current selection synchronously and apply the result.
    pub fn convert(&self) -> String {
        let ticket = self.begin();
        let result = ticket.run();
        self.complete(&ticket, result);
        self.output()
    }

    /// Start a new request. Every earlier ticket becomes stale.
    pub fn begin(&self) -> Ticket {
        let state = self.state();
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("request #{} for {} file(s)", seq, state.selected.len());
        Ticket {
            seq,
            files: state.selected.clone(),
            mode: state.mode,
            options: self.options.clone(),
        }
    }

    /// Apply the result of `ticket` if it is still the newest request.
    ///
    /// On error the output becomes `Error: <message>` and the selection is
    /// cleared. Returns `false` if the result was stale and dropped.
    pub fn complete(&self, ticket: &Ticket, result: Result<String>) -> bool {
        let mut state = self.state();
        let latest = self.latest.load(Ordering::SeqCst);
        if ticket.seq != latest {
            warn!(
                "dropping result of request #{} (latest is #{})",
                ticket.seq, latest
            );
            return false;
        }

        match result {
            Ok(text) => state.output = text,
            Err(err) => {
                state.output = render_error(&err);
                state.selected.clear();
            }
        }
        true
    }

    /// Text currently shown.
    pub fn output(&self) -> String {
        self.state().output.clone()
    }

    pub fn mode(&self) -> OutputMode {
        self.state().mode
    }

    /// Names of the selected files, in selection order.
    pub fn selected(&self) -> Vec<String> {
        self.state().selected.iter().map(|f| f.name.clone()).collect()
    }
}
