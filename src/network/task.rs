//! Background fetch bound to the lifetime of the screen that started it.
//!
//! The worker thread fetches and parses, then hands the result back over a
//! channel. Only the owner of the `FetchTask` (the UI thread) applies it, so
//! render state keeps a single writer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::config::EndpointConfig;
use crate::error::{Error, Result};
use crate::models::Flashcard;
use crate::network::fetch::Fetcher;
use crate::payload::parse_flashcards;

pub struct FetchTask {
    receiver: Receiver<Result<Vec<Flashcard>>>,
    cancelled: Arc<AtomicBool>,
    finished: bool,
}

impl FetchTask {
    /// Starts the one-off fetch on a worker thread.
    ///
    /// `on_ready` runs on the worker right after the result is sent; the
    /// screen uses it to request a repaint. It is not called if the task was
    /// cancelled in the meantime.
    pub fn spawn<F>(endpoint: EndpointConfig, on_ready: F) -> Result<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let worker_cancelled = Arc::clone(&cancelled);

        thread::Builder::new()
            .name("flashcard-fetch".to_string())
            .spawn(move || {
                if worker_cancelled.load(Ordering::Acquire) {
                    return;
                }

                let result = fetch_and_parse(&endpoint);

                if worker_cancelled.load(Ordering::Acquire) {
                    log::debug!("Fetch from {} cancelled, discarding result", endpoint.url());
                    return;
                }
                // Receiver gone means the task was dropped
                if sender.send(result).is_ok() {
                    on_ready();
                }
            })?;

        Ok(Self {
            receiver,
            cancelled,
            finished: false,
        })
    }

    /// Non-blocking check for the result.
    ///
    /// Returns `None` while the fetch is in flight, and `Some` exactly once.
    pub fn poll(&mut self) -> Option<Result<Vec<Flashcard>>> {
        if self.finished || self.is_cancelled() {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.finished = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.finished = true;
                Some(Err(Error::WorkerGone))
            }
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn fetch_and_parse(endpoint: &EndpointConfig) -> Result<Vec<Flashcard>> {
    let fetcher = Fetcher::new(endpoint)?;
    log::info!("Fetching flashcards from {}", fetcher.url());
    let body = fetcher.fetch()?;
    parse_flashcards(&body)
}
