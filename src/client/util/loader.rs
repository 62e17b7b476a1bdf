use std::future::Future;

use dioxus::prelude::*;
use railway_admin::{error::Error, view::RequestGeneration, ApiClient};

use super::handle_error;

/// Data fetched for a page, plus the state of the last fetch
pub struct Loader<T: 'static> {
    pub data: Signal<T>,
    pub error: Signal<Option<String>>,
    pub loading: Signal<bool>,
    reload: Signal<u32>,
}

impl<T> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Loader<T> {}

impl<T> PartialEq for Loader<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.reload == other.reload
    }
}

impl<T> Loader<T> {
    /// Fetch again with the current query
    pub fn retry(&self) {
        let mut reload = self.reload;
        *reload.write() += 1;
    }
}

/// Fetch `T` whenever the signals read by `query` change
///
/// Each fetch runs as a new [`RequestGeneration`], so a slow response for an outdated query
/// is aborted instead of overwriting the newer one.
pub fn use_loader<Q, T, QueryFn, Fetch, Fut>(mut query: QueryFn, fetch: Fetch) -> Loader<T>
where
    Q: 'static,
    T: Default + 'static,
    QueryFn: FnMut() -> Q + 'static,
    Fetch: Fn(ApiClient, Q) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, Error>> + 'static,
{
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();
    let generation = use_hook(RequestGeneration::new);

    // Leaving the page drops whatever is still in flight
    use_drop({
        let generation = generation.clone();
        move || generation.cancel()
    });

    let mut data = use_signal(T::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let reload = use_signal(|| 0u32);

    use_effect(move || {
        reload.read();
        let query = query();
        let client = client.clone();
        let generation = generation.clone();

        loading.set(true);
        spawn(async move {
            match generation.run(fetch(client, query)).await {
                Ok(fetched) => {
                    data.set(fetched);
                    error.set(None);
                    loading.set(false);
                }
                Err(err) => {
                    if let Some(message) = handle_error(&err, navigator) {
                        error.set(Some(message));
                        loading.set(false);
                    }
                }
            }
        });
    });

    Loader {
        data,
        error,
        loading,
        reload,
    }
}
