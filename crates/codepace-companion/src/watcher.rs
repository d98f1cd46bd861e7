//! Turns changes to a saved page file into mutation batches.

use std::path::{Path, PathBuf};

use futures::stream::{self, Stream};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::detector::MutationBatch;
use crate::error::CompanionError;

/// Watches one HTML file. Each change re-reads the file into a [`MutationBatch`].
pub struct PageWatcher {
    path: PathBuf,
    events: mpsc::Receiver<()>,
    _watcher: RecommendedWatcher,
}

impl PageWatcher {
    /// Start watching `path`. The file must exist.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, CompanionError> {
        let path = path.into();
        if !path.is_file() {
            return Err(CompanionError::Watch(format!(
                "Page file not found: {}",
                path.display()
            )));
        }

        // Editors often save by replacing the file, so watch the directory.
        let directory = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = path.file_name().map(|n| n.to_os_string());

        let (tx, events) = mpsc::channel::<()>(64);
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                if let Ok(event) = result {
                    let touches_page = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                    if touches_page && Self::is_relevant_event(&event) {
                        let _ = tx.blocking_send(());
                    }
                }
            },
            Config::default(),
        )?;
        watcher.watch(&directory, RecursiveMode::NonRecursive)?;
        info!("Watching page file: {}", path.display());

        Ok(Self {
            path,
            events,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_relevant_event(event: &Event) -> bool {
        matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
    }

    /// Stream of snapshots, one per observed change. Dropping the stream stops the watcher.
    pub fn into_mutations(self) -> impl Stream<Item = MutationBatch> + Send {
        stream::unfold((self, 0u64), |(mut this, sequence)| async move {
            loop {
                this.events.recv().await?;
                match tokio::fs::read_to_string(&this.path).await {
                    Ok(snapshot) => {
                        let sequence = sequence + 1;
                        debug!("Page mutation {} ({} bytes)", sequence, snapshot.len());
                        return Some((MutationBatch::new(sequence, snapshot), (this, sequence)));
                    }
                    Err(e) => warn!("Failed to re-read {}: {}", this.path.display(), e),
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
