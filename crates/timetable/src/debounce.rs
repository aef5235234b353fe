//! Debouncing for the search view.
//!
//! Each keystroke restarts a fixed quiet-period timer; only the query
//! pending when the timer finally elapses is executed. Leaving the view
//! cancels whatever is pending — the caller clears displayed results at
//! that point so nothing stale survives a round trip away from the view.

use std::time::Duration;
use tokio::sync::mpsc;

/// Quiet period a query must survive before it runs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Input events for the debouncer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query text changed (a keystroke).
    Query(String),
    /// The user left the search view.
    Leave,
}

/// Sender half handed to the input side.
#[derive(Debug, Clone)]
pub struct SearchHandle {
    tx: mpsc::UnboundedSender<SearchEvent>,
}

impl SearchHandle {
    pub fn query(&self, text: impl Into<String>) {
        // A closed receiver means the view loop is gone; nothing to do.
        let _ = self.tx.send(SearchEvent::Query(text.into()));
    }

    pub fn leave(&self) {
        let _ = self.tx.send(SearchEvent::Leave);
    }
}

/// Receiver half owned by the view loop.
#[derive(Debug)]
pub struct SearchDebouncer {
    rx: mpsc::UnboundedReceiver<SearchEvent>,
    delay: Duration,
}

impl SearchDebouncer {
    /// Creates a connected handle/debouncer pair with the given quiet
    /// period.
    pub fn channel(delay: Duration) -> (SearchHandle, SearchDebouncer) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SearchHandle { tx }, SearchDebouncer { rx, delay })
    }

    /// Waits for the next query that survives the quiet period.
    ///
    /// A fresh [`SearchEvent::Query`] while one is pending replaces it and
    /// restarts the timer, so only the last of a burst executes. Returns
    /// `None` on [`SearchEvent::Leave`] or when every handle is dropped;
    /// any pending query is discarded in both cases.
    pub async fn next_query(&mut self) -> Option<String> {
        let mut pending: Option<String> = None;

        loop {
            match pending.take() {
                None => match self.rx.recv().await {
                    Some(SearchEvent::Query(q)) => pending = Some(q),
                    Some(SearchEvent::Leave) | None => return None,
                },
                Some(q) => {
                    tokio::select! {
                        event = self.rx.recv() => match event {
                            Some(SearchEvent::Query(newer)) => pending = Some(newer),
                            Some(SearchEvent::Leave) | None => return None,
                        },
                        _ = tokio::time::sleep(self.delay) => return Some(q),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn only_the_last_of_a_burst_executes() {
        let (handle, mut debouncer) = SearchDebouncer::channel(SEARCH_DEBOUNCE);

        handle.query("p");
        handle.query("ph");
        handle.query("physics");

        assert_eq!(debouncer.next_query().await.as_deref(), Some("physics"));
    }

    #[tokio::test(start_paused = true)]
    async fn a_keystroke_restarts_the_timer() {
        let (handle, mut debouncer) = SearchDebouncer::channel(SEARCH_DEBOUNCE);
        let pending = tokio::spawn(async move { debouncer.next_query().await });

        handle.query("ro");
        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.query("room");

        // 200ms after the second keystroke the first timer would long have
        // fired; the restarted one must not have.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!pending.is_finished());

        tokio::time::sleep(Duration::from_millis(150)).await;
        let got = pending.await.unwrap();
        assert_eq!(got.as_deref(), Some("room"));
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_cancels_the_pending_query() {
        let (handle, mut debouncer) = SearchDebouncer::channel(SEARCH_DEBOUNCE);

        handle.query("half-typed");
        handle.leave();

        assert_eq!(debouncer.next_query().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_every_handle_ends_the_stream() {
        let (handle, mut debouncer) = SearchDebouncer::channel(SEARCH_DEBOUNCE);

        drop(handle);

        assert_eq!(debouncer.next_query().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_queries_each_fire_after_their_quiet_period() {
        let (handle, mut debouncer) = SearchDebouncer::channel(SEARCH_DEBOUNCE);

        handle.query("first");
        assert_eq!(debouncer.next_query().await.as_deref(), Some("first"));

        handle.query("second");
        assert_eq!(debouncer.next_query().await.as_deref(), Some("second"));
    }
}
