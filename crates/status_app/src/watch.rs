use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, SystemTime};

use anyhow::Result;
use document_engine::{DocumentFormat, DocumentLoader, LoadedDocument};
use status_logging::{status_debug, status_info, status_warn};

use crate::session::Session;

enum WatchEvent {
    Changed(LoadedDocument),
    Failed(String),
    /// Render tick; status is printed only if it changed since the last one.
    Tick,
}

/// Consecutive polls that may find the file missing before watching stops.
/// Editors that save by delete-then-rename leave a short gap.
const MISSING_POLLS_ALLOWED: u32 = 2;

/// Counts consecutive polls that found no file.
#[derive(Debug, Default)]
struct MissingGrace {
    misses: u32,
}

impl MissingGrace {
    /// Records one poll result; true once the file has been missing for
    /// [`MISSING_POLLS_ALLOWED`] polls in a row.
    fn should_stop(&mut self, found: bool) -> bool {
        if found {
            self.misses = 0;
            return false;
        }
        self.misses += 1;
        self.misses >= MISSING_POLLS_ALLOWED
    }
}

/// Re-analyses `path` whenever its size or modification time changes, printing
/// the status line each time it differs. Returns once the file has stayed
/// removed for a full poll interval.
pub fn watch(
    session: &Session,
    path: &Path,
    format: DocumentFormat,
    interval: Duration,
    out: &mut impl Write,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<WatchEvent>();
    let loader = session.loader();

    thread::scope(|scope| -> Result<()> {
        scope.spawn(move || poll_file(loader, path, format, interval, tx));

        let mut state = session.initial_state();
        let mut name = path.display().to_string();
        for event in rx {
            match event {
                WatchEvent::Changed(doc) => {
                    state = session.apply(state, &doc)?;
                    status_debug!("{} revision {}", doc.name, state.revision());
                    name = doc.name;
                }
                WatchEvent::Failed(message) => {
                    status_warn!("{}: {}", name, message);
                }
                WatchEvent::Tick => {
                    if state.consume_dirty() {
                        writeln!(out, "{}", state.view().status.status_line())?;
                        out.flush()?;
                    }
                }
            }
        }
        status_info!("Stopped watching {}", name);
        Ok(())
    })
}

fn poll_file(
    loader: &DocumentLoader,
    path: &Path,
    format: DocumentFormat,
    interval: Duration,
    tx: mpsc::Sender<WatchEvent>,
) {
    let mut last_seen: Option<(SystemTime, u64)> = None;
    let mut grace = MissingGrace::default();
    loop {
        match fs::metadata(path) {
            Ok(meta) => {
                grace.should_stop(true);
                let stamp = (meta.modified().unwrap_or(SystemTime::UNIX_EPOCH), meta.len());
                if last_seen != Some(stamp) {
                    last_seen = Some(stamp);
                    let event = match loader.load_path(path, format) {
                        Ok(doc) => WatchEvent::Changed(doc),
                        Err(err) => WatchEvent::Failed(err.to_string()),
                    };
                    if tx.send(event).is_err() {
                        return;
                    }
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if grace.should_stop(false) {
                    return;
                }
                status_debug!("{} is missing, checking again", path.display());
            }
            Err(err) => {
                let _ = tx.send(WatchEvent::Failed(err.to_string()));
                return;
            }
        }
        if tx.send(WatchEvent::Tick).is_err() {
            return;
        }
        thread::sleep(interval);
    }
}
