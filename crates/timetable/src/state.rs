//! Single-writer view state for a front-end event loop.
//!
//! All mutable display state lives in one [`ViewState`] owned by the event
//! loop and passed by reference to whoever needs to read it. Fetches are not
//! cancelled when the user navigates away; instead every triggered fetch is
//! tagged with a [`RequestToken`], and a completion is applied only while
//! its token is still the current one. A slow response arriving after a
//! newer fetch (or after a view change) is discarded, so stale data can
//! never overwrite fresher state.

use crate::views::SearchHit;

/// Identifies one triggered fetch. Tokens are issued in increasing order
/// and only the most recently issued one is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// The views a front-end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Today,
    Week,
    Search,
    Courses,
    Status,
}

/// Mutable display state: active view, selected group, loading flag, and
/// the currently shown search results.
#[derive(Debug)]
pub struct ViewState {
    view: View,
    selected_group: Option<String>,
    loading: bool,
    issued: u64,
    search_results: Vec<SearchHit>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            view: View::Today,
            selected_group: None,
            loading: false,
            issued: 0,
            search_results: Vec::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn selected_group(&self) -> Option<&str> {
        self.selected_group.as_deref()
    }

    pub fn set_selected_group(&mut self, group: Option<String>) {
        self.selected_group = group;
    }

    /// Switches the active view.
    ///
    /// Outstanding fetches for the previous view are invalidated (their
    /// tokens go stale), and leaving the search view drops its displayed
    /// results immediately — coming back without typing shows nothing.
    pub fn enter(&mut self, view: View) {
        if self.view == View::Search && view != View::Search {
            self.search_results.clear();
        }
        self.view = view;
        self.loading = false;
        self.issued += 1;
    }

    /// Marks a fetch as triggered and returns its token. The newest token
    /// supersedes all earlier ones.
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.issued += 1;
        self.loading = true;
        RequestToken(self.issued)
    }

    /// Returns true while `token` is still the most recently issued one.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// Applies a completed fetch through `apply` only if its token is still
    /// current; a superseded completion is dropped. Returns whether the
    /// result was applied.
    pub fn complete<F>(&mut self, token: RequestToken, apply: F) -> bool
    where
        F: FnOnce(&mut ViewState),
    {
        if !self.is_current(token) {
            return false;
        }
        self.loading = false;
        apply(self);
        true
    }

    pub fn search_results(&self) -> &[SearchHit] {
        &self.search_results
    }

    pub fn set_search_results(&mut self, hits: Vec<SearchHit>) {
        self.search_results = hits;
    }

    pub fn clear_search_results(&mut self) {
        self.search_results.clear();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
