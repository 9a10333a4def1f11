//! Pure navigation state machine for the page surface.
//!
//! Everything the chrome needs to know about navigation lives here,
//! with no `wry` types in sight, so the full load lifecycle is unit
//! testable. The wry shell (`PageSurface`) feeds engine callbacks in
//! and executes the `EngineCommand`s handed back by the command side.

use lantern_common::SurfaceSnapshot;
use tracing::debug;
use url::Url;

use crate::history::NavHistory;
use crate::signal::SurfaceSignal;

// =============================================================================
// PROGRESS MILESTONES
// =============================================================================

// wry does not expose the engine's estimated progress, so the adapter
// synthesizes one from load-lifecycle milestones. Within a single load
// the value only ever rises.

/// Progress the moment a navigation is accepted.
pub const PROGRESS_START: f64 = 0.1;
/// Progress once the engine commits the load and starts rendering.
pub const PROGRESS_COMMIT: f64 = 0.4;
/// Progress once the document title arrives.
pub const PROGRESS_TITLE: f64 = 0.7;
/// Progress when the load completes.
pub const PROGRESS_DONE: f64 = 1.0;

/// A navigation command for the wry shell to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Load a URL, superseding any in-flight load.
    Load(Url),
    /// Walk one entry back in the engine's session history.
    TraverseBack,
    /// Walk one entry forward in the engine's session history.
    TraverseForward,
}

/// Navigation state: the history mirror, loading flag, synthesized
/// progress, and the pending signal queue.
#[derive(Debug, Default)]
pub struct SurfaceState {
    history: NavHistory,
    is_loading: bool,
    /// Set once the in-flight load has claimed its history entry, so a
    /// later redirect commit replaces instead of recording again.
    committed: bool,
    progress: f64,
    /// Set when the next engine navigation was initiated by a traversal
    /// or reload command; the commit must not record a new entry.
    suppress_record: bool,
    pending: Vec<SurfaceSignal>,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // COMMAND SIDE — user intent in, engine command out
    // =========================================================================

    /// Load `url`, replacing the current page.
    pub fn navigate(&mut self, url: Url) -> Option<EngineCommand> {
        // An explicit navigate supersedes any traversal still waiting
        // for its engine callback; it must record normally.
        self.suppress_record = false;
        Some(EngineCommand::Load(url))
    }

    /// Go back one entry. `None` when there is nothing behind the cursor.
    pub fn go_back(&mut self) -> Option<EngineCommand> {
        if self.history.back().is_some() {
            self.suppress_record = true;
            Some(EngineCommand::TraverseBack)
        } else {
            None
        }
    }

    /// Go forward one entry. `None` when there is nothing ahead.
    pub fn go_forward(&mut self) -> Option<EngineCommand> {
        if self.history.forward().is_some() {
            self.suppress_record = true;
            Some(EngineCommand::TraverseForward)
        } else {
            None
        }
    }

    /// Reload the current entry. `None` when no page has ever committed.
    ///
    /// Issued as a plain `Load` of the current URL; two reloads in a
    /// row produce two identical commands, no deduplication.
    pub fn reload(&mut self) -> Option<EngineCommand> {
        let current = self.history.current().cloned()?;
        self.suppress_record = true;
        Some(EngineCommand::Load(current))
    }

    // =========================================================================
    // CALLBACK SIDE — engine events in, mirror updates + signals out
    // =========================================================================

    /// The engine accepted a navigation to `url`.
    ///
    /// Non-web schemes (`about:`, `data:` boot pages) never reach the
    /// mirror or the progress display. The mirror itself is untouched
    /// until the load commits, so a provisional navigation that fails
    /// leaves history exactly as it was.
    pub fn navigation_started(&mut self, url: Url) {
        if !is_web_url(&url) {
            debug!(url = %url, "ignoring non-web navigation");
            return;
        }

        if self.is_loading {
            // A navigation arriving mid-load is a redirect of that load.
            self.raise_progress(PROGRESS_START);
        } else {
            self.is_loading = true;
            self.committed = false;
            self.progress = PROGRESS_START;
        }
        self.pending.push(SurfaceSignal::LoadingChanged);
        self.pending.push(SurfaceSignal::ProgressChanged(self.progress));
    }

    /// The engine committed the load and began rendering.
    ///
    /// Commit is where the mirror changes, matching the engine's own
    /// back-forward list: a traversal or reload keeps its entry, a
    /// redirect of an already-committed load replaces it, and anything
    /// else records a new one.
    pub fn page_load_started(&mut self, url: Url) {
        if !self.is_loading {
            return;
        }
        debug!(url = %url, "page load committed");

        if self.suppress_record {
            // A traversal already moved the cursor; a reload keeps it.
            self.suppress_record = false;
        } else if self.committed {
            self.history.replace_current(url);
        } else {
            self.history.record(url);
        }
        self.committed = true;

        self.raise_progress(PROGRESS_COMMIT);
        self.pending.push(SurfaceSignal::LoadingChanged);
        self.pending.push(SurfaceSignal::ProgressChanged(self.progress));
    }

    /// The document title changed.
    pub fn title_changed(&mut self, title: String) {
        if self.is_loading {
            self.raise_progress(PROGRESS_TITLE);
            self.pending.push(SurfaceSignal::ProgressChanged(self.progress));
        }
        self.pending.push(SurfaceSignal::TitleChanged { title });
    }

    /// The load completed.
    pub fn page_load_finished(&mut self, url: String) {
        if !self.is_loading {
            return;
        }
        debug!(url = %url, "page load finished");
        self.is_loading = false;
        self.progress = PROGRESS_DONE;
        self.pending.push(SurfaceSignal::ProgressChanged(PROGRESS_DONE));
        self.pending.push(SurfaceSignal::LoadingChanged);
        self.pending.push(SurfaceSignal::NavigationFinished { url });
    }

    /// The engine reported a load failure.
    ///
    /// Progress is deliberately left where it was; the next progress
    /// signal corrects the indicator. A failure before commit leaves
    /// the mirror untouched; after commit the entry stays, as it does
    /// in the engine's own list.
    pub fn load_failed(&mut self, message: String) {
        debug!(message = %message, "load failed");
        self.is_loading = false;
        // The failed command will produce no engine navigation, so any
        // pending suppression must not leak onto the next real one.
        self.suppress_record = false;
        self.pending.push(SurfaceSignal::LoadingChanged);
        self.pending.push(SurfaceSignal::NavigationFailed { message });
    }

    // =========================================================================
    // READ SIDE
    // =========================================================================

    /// Derive the five snapshot attributes from the mirror.
    pub fn snapshot(&self) -> SurfaceSnapshot {
        SurfaceSnapshot {
            is_loading: self.is_loading,
            estimated_progress: self.progress,
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
            current_url: self.history.current().cloned(),
        }
    }

    /// Hand the pending signals to the caller, in push order.
    pub fn drain(&mut self) -> Vec<SurfaceSignal> {
        std::mem::take(&mut self.pending)
    }

    fn raise_progress(&mut self, target: f64) {
        if target > self.progress {
            self.progress = target;
        }
    }
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

// =============================================================================
// TESTS
// =============================================================================
