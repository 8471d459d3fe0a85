//! Polling file watcher.
//!
//! DESIGN
//! ======
//! Each tick walks the watched roots, stamps every regular file with its
//! modification time and length, and diffs the snapshot against the previous
//! tick. A non-empty diff becomes one `full-reload` event on the broadcast
//! channel. Missing roots scan as empty, so a directory created later (the
//! built site on first compile) is picked up on the next tick.
//!
//! Unreadable entries are skipped rather than reported; a file that vanishes
//! mid-walk shows up as removed on the following tick.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::hmr::ReloadEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    pub modified: SystemTime,
    pub len: u64,
}

pub type Snapshot = BTreeMap<PathBuf, FileStamp>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<PathBuf>,
    pub modified: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

impl ChangeSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    /// All changed paths, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> =
            self.added.iter().chain(&self.modified).chain(&self.removed).cloned().collect();
        paths.sort();
        paths
    }
}

/// Walk `roots` and stamp every regular file found.
#[must_use]
pub fn scan(roots: &[PathBuf]) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for root in roots {
        for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            let Ok(modified) = meta.modified() else {
                continue;
            };
            snapshot.insert(entry.into_path(), FileStamp { modified, len: meta.len() });
        }
    }
    snapshot
}

#[must_use]
pub fn diff(previous: &Snapshot, current: &Snapshot) -> ChangeSet {
    let mut changes = ChangeSet::default();
    for (path, stamp) in current {
        match previous.get(path) {
            None => changes.added.push(path.clone()),
            Some(old) if old != stamp => changes.modified.push(path.clone()),
            Some(_) => {}
        }
    }
    changes.removed = previous.keys().filter(|path| !current.contains_key(*path)).cloned().collect();
    changes
}

/// Render changed paths relative to `root` for display in the browser.
#[must_use]
pub fn display_paths(root: &Path, changes: &ChangeSet) -> Vec<String> {
    changes
        .paths()
        .iter()
        .map(|path| path.strip_prefix(root).unwrap_or(path).display().to_string())
        .collect()
}

/// Spawn the polling loop. Returns a handle for shutdown.
pub fn spawn_watcher(
    roots: Vec<PathBuf>,
    root: PathBuf,
    interval: Duration,
    reload_tx: broadcast::Sender<ReloadEvent>,
) -> JoinHandle<()> {
    info!(roots = ?roots, interval_ms = interval.as_millis(), "polling watcher started");
    let roots: Arc<[PathBuf]> = roots.into();
    tokio::spawn(async move {
        let mut previous = scan_blocking(Arc::clone(&roots)).await;
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let current = scan_blocking(Arc::clone(&roots)).await;
            let changes = diff(&previous, &current);
            previous = current;
            if changes.is_empty() {
                continue;
            }

            let paths = display_paths(&root, &changes);
            info!(changed = paths.len(), "file change detected");
            // An error only means no browser is connected.
            if reload_tx.send(ReloadEvent::full_reload(paths)).is_err() {
                debug!("no hmr clients connected");
            }
        }
    })
}

async fn scan_blocking(roots: Arc<[PathBuf]>) -> Snapshot {
    tokio::task::spawn_blocking(move || scan(&roots)).await.unwrap_or_default()
}

#[cfg(test)]
#[path = "watch_test.rs"]
mod tests;
