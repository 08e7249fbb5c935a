use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces search input: a term is released only once no newer input has
/// arrived for `delay`, and never twice in a row.
pub struct SearchDebouncer {
    rx: mpsc::Receiver<String>,
    delay: Duration,
    last: Option<String>,
}

impl SearchDebouncer {
    pub fn new(rx: mpsc::Receiver<String>) -> Self {
        Self::with_delay(rx, SEARCH_DEBOUNCE)
    }

    pub fn with_delay(rx: mpsc::Receiver<String>, delay: Duration) -> Self {
        SearchDebouncer { rx, delay, last: None }
    }

    /// Next settled term, or `None` once the input side is closed and
    /// nothing is pending.
    pub async fn next(&mut self) -> Option<String> {
        loop {
            let mut pending = self.rx.recv().await?;
            loop {
                match timeout(self.delay, self.rx.recv()).await {
                    Ok(Some(term)) => pending = term,
                    Ok(None) | Err(_) => break,
                }
            }
            let pending = pending.trim().to_string();
            if self.last.as_deref() != Some(pending.as_str()) {
                self.last = Some(pending.clone());
                return Some(pending);
            }
            log::debug!("Search term unchanged, skipping");
        }
    }
}
