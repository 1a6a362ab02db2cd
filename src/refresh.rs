use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use anyhow::{anyhow, Result};

use crate::data::loader::{CandidateSource, SourceFilter};
use crate::data::model::Candidate;

// ---------------------------------------------------------------------------
// Request stamps
// ---------------------------------------------------------------------------

/// Issues increasing request ids and remembers the newest one applied, so a
/// fetch that resolves late can never overwrite a newer snapshot.
#[derive(Debug, Default)]
pub struct RefreshTracker {
    last_issued: u64,
    last_applied: u64,
}

impl RefreshTracker {
    pub fn begin(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    /// Accept `id` if it is newer than anything applied so far.
    pub fn accept(&mut self, id: u64) -> bool {
        if id > self.last_applied {
            self.last_applied = id;
            true
        } else {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Background loader
// ---------------------------------------------------------------------------

/// What a finished fetch looks like once it reaches the frame loop.
pub struct LoadResult {
    pub request_id: u64,
    pub outcome: Result<Vec<Candidate>>,
}

/// Runs fetches off the UI thread and hands back only results that are still
/// the newest.
pub struct Loader {
    source: Arc<dyn CandidateSource>,
    tracker: RefreshTracker,
    pending: usize,
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
}

impl Loader {
    pub fn new(source: Arc<dyn CandidateSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tracker: RefreshTracker::default(),
            pending: 0,
            tx,
            rx,
        }
    }

    pub fn source(&self) -> &Arc<dyn CandidateSource> {
        &self.source
    }

    /// Point subsequent requests at a different source.
    pub fn set_source(&mut self, source: Arc<dyn CandidateSource>) {
        self.source = source;
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Start a fetch on a worker thread and return its request id.
    pub fn request(&mut self, filter: SourceFilter, limit: Option<usize>, force_refresh: bool) -> u64 {
        let request_id = self.tracker.begin();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.pending += 1;
        log::info!(
            "Fetching candidates from {} (request {request_id}, force={force_refresh})",
            source.describe()
        );

        thread::spawn(move || {
            // A panicking source still reports back, or `pending` never drains.
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                source.fetch_candidates(&filter, limit, force_refresh)
            }))
            .unwrap_or_else(|_| Err(anyhow!("candidate source panicked during fetch")));
            // The receiver only goes away with the app itself.
            let _ = tx.send(LoadResult {
                request_id,
                outcome,
            });
        });
        request_id
    }

    /// Drain finished fetches. Returns the newest acceptable result, if any;
    /// stale ones are logged and dropped.
    pub fn poll(&mut self) -> Option<LoadResult> {
        let mut newest = None;
        loop {
            match self.rx.try_recv() {
                Ok(result) => {
                    self.pending = self.pending.saturating_sub(1);
                    if self.tracker.accept(result.request_id) {
                        newest = Some(result);
                    } else {
                        log::debug!("Discarding stale fetch result {}", result.request_id);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        newest
    }
}
