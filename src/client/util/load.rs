use std::future::Future;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    error::Error,
    store::session::{SessionSlot, SessionStore},
    view::{ResourceSlot, Settlement, ViewResource},
};

/// A view-scoped resource that stops accepting results once the view unmounts
pub fn use_view_resource<T: 'static>() -> Signal<ViewResource<T>> {
    let mut resource = use_signal(ViewResource::<T>::new);

    use_drop(move || {
        // The signal may already be gone when the scope is torn down
        if let Ok(mut resource) = resource.try_write() {
            resource.detach();
        }
    });

    resource
}

impl<T: 'static> ResourceSlot<T> for Signal<ViewResource<T>> {
    fn with_resource<R>(&mut self, f: impl FnOnce(&mut ViewResource<T>) -> R) -> Option<R> {
        match self.try_write() {
            Ok(mut resource) => Some(f(&mut resource)),
            Err(_) => {
                tracing::debug!("View closed before its data arrived");
                None
            }
        }
    }
}

/// The shared API client carrying the current session's bearer token, if anyone is logged in
pub fn use_authorized_api() -> Option<ApiClient> {
    let session = use_context::<Signal<SessionStore>>();
    let api = use_context::<ApiClient>();

    session
        .current_session()
        .map(|session| api.authorized(&session))
}

/// Issues `fetch` on behalf of `resource`.
///
/// The result is applied only if no newer fetch was issued for the same resource in the
/// meantime and the view is still mounted.
pub fn load_into<T, F>(mut resource: Signal<ViewResource<T>>, fetch: F)
where
    T: 'static,
    F: Future<Output = Result<T, Error>> + 'static,
{
    let ticket = resource.write().begin();

    spawn(async move {
        let result = fetch.await;

        match resource.try_write() {
            Ok(mut resource) => {
                if resource.settle(ticket, result) != Settlement::Applied {
                    tracing::debug!("Discarded a stale view result");
                }
            }
            Err(_) => tracing::debug!("View closed before its data arrived"),
        }
    });
}
