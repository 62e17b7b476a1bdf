use std::{
    future::Future,
    sync::{Arc, Mutex},
};

use futures::future::{AbortHandle, Abortable};

use crate::error::Error;

#[derive(Default)]
struct GenerationState {
    current: u64,
    in_flight: Option<AbortHandle>,
}

/// Tracks the latest request issued by a list page
///
/// Starting a new request aborts the one still in flight, and a response that completes after
/// a newer request started is discarded. A superseded request therefore never overwrites the
/// state produced by a fresher one. Clones share the same generation counter.
#[derive(Clone, Default)]
pub struct RequestGeneration {
    state: Arc<Mutex<GenerationState>>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the most recently started generation, 0 before the first request
    pub fn current(&self) -> u64 {
        self.lock().current
    }

    /// Aborts the in-flight request without starting a new one
    pub fn cancel(&self) {
        let mut state = self.lock();
        if let Some(handle) = state.in_flight.take() {
            handle.abort();
        }
        state.current += 1;
    }

    /// Runs `request` as a new generation
    ///
    /// Returns [`Error::Cancelled`] when the request was aborted or finished after a newer
    /// generation had started.
    pub async fn run<T, F>(&self, request: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        let (generation, registration) = {
            let mut state = self.lock();
            if let Some(handle) = state.in_flight.take() {
                handle.abort();
            }

            let (handle, registration) = AbortHandle::new_pair();
            state.current += 1;
            state.in_flight = Some(handle);

            (state.current, registration)
        };

        let result = Abortable::new(request, registration).await;

        let mut state = self.lock();
        if state.current != generation {
            return Err(Error::Cancelled);
        }
        state.in_flight = None;

        result.unwrap_or(Err(Error::Cancelled))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GenerationState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
