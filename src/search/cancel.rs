//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Shared flag polled by the search at every recursive step.
///
/// Clones share the same flag. Once cancelled, the search unwinds and
/// returns the best route found so far.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::search::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Spawns a watchdog thread that cancels this token after `limit`.
    ///
    /// The limit stays armed while the returned [`Watchdog`] is alive.
    /// Dropping it wakes the thread, which exits without cancelling, so
    /// repeated searches do not leave sleeping threads behind.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_tsp_brute::search::CancelToken;
    ///
    /// let token = CancelToken::new();
    /// let watchdog = token.cancel_after(Duration::from_secs(3600));
    /// drop(watchdog);
    /// assert!(!token.is_cancelled());
    /// ```
    pub fn cancel_after(&self, limit: Duration) -> Watchdog {
        let token = self.clone();
        let (disarm, armed) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = armed.recv_timeout(limit) {
                log::warn!("search.cancel: time limit reached limit_ms={}", limit.as_millis());
                token.cancel();
            }
        });
        Watchdog {
            disarm: Some(disarm),
            handle: Some(handle),
        }
    }
}

/// Guard for a time limit started by [`CancelToken::cancel_after`].
///
/// Dropping the guard disarms the limit and joins the watchdog thread.
#[derive(Debug)]
#[must_use = "dropping the watchdog disarms the time limit"]
pub struct Watchdog {
    disarm: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        // Closing the channel wakes the thread before its deadline.
        self.disarm.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
