//! Search input debouncing.
//!
//! Each keystroke starts a timer and cancels the previous pending one;
//! the query text is delivered only after the configured quiet period
//! elapses. At most one emission is ever pending per input stream, so
//! no two suggestion computations are in flight for the same search
//! box.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::trace;

/// Debouncer for the search box.
///
/// Feed raw keystrokes with [`input`](Self::input); read settled query
/// strings from the receiver returned by [`new`](Self::new) and run the
/// suggestion derivation on each.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    tx: UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Create a debouncer with the given quiet period, along with the
    /// channel on which settled queries arrive.
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Accept the current contents of the search box.
    ///
    /// Cancels any pending emission and schedules a new one for after
    /// the quiet period.
    pub fn input(&mut self, text: impl Into<String>) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }

        let text = text.into();
        trace!(%text, "search input debounced");

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(text);
        }));
    }

    /// Cancel any pending emission, e.g. when the search box closes.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(350);

    #[tokio::test(start_paused = true)]
    async fn test_only_the_last_keystroke_fires() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DELAY);

        debouncer.input("g");
        time::advance(Duration::from_millis(100)).await;
        debouncer.input("ga");
        time::advance(Duration::from_millis(100)).await;
        debouncer.input("galaxy");

        // Nothing settles before the quiet period elapses.
        time::advance(Duration::from_millis(349)).await;
        assert!(rx.try_recv().is_err());

        time::advance(Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("galaxy"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_quiet_periods_each_fire() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DELAY);

        debouncer.input("pixel");
        time::advance(DELAY).await;
        assert_eq!(rx.recv().await.as_deref(), Some("pixel"));

        debouncer.input("buds");
        time::advance(DELAY).await;
        assert_eq!(rx.recv().await.as_deref(), Some("buds"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_the_pending_query() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DELAY);

        debouncer.input("redmi");
        debouncer.cancel();

        time::advance(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
    }
}
