use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::api_client::ApiError;
use crate::hooks::FetchState;

/// Fetches on mount and again whenever `deps` changes.
///
/// Returns the current state and a callback that repeats the request with
/// the current `deps`, used by the retry button.
#[hook]
pub fn use_fetch_with_refetch<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback(deps.clone(), move |_: (), deps| {
            let fetch_state = fetch_state.clone();
            let fut = (*fetch_fn)(deps.clone());

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                fetch_state.set(fut.await.into());
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
