//! App-wide context values: configuration, the API client and the feed
//! refresh counter.

use std::future::Future;

use api::ApiClient;
use dioxus::prelude::*;
use store::ClientConfig;

/// The client configuration provided at the app root.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// The shared API client provided at the app root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Counter that feed views watch; bumping it makes them refetch.
#[derive(Clone, Copy, PartialEq)]
pub struct FeedRefresh(Signal<u32>);

impl FeedRefresh {
    /// Current generation. Reading it inside a resource subscribes to bumps.
    pub fn generation(&self) -> u32 {
        *self.0.read()
    }

    pub fn bump(&mut self) {
        let next = self.0.peek().wrapping_add(1);
        self.0.set(next);
    }
}

/// Provide a fresh [`FeedRefresh`] to the subtree.
pub fn use_feed_refresh_provider() -> FeedRefresh {
    use_context_provider(|| FeedRefresh(Signal::new(0)))
}

pub fn use_feed_refresh() -> FeedRefresh {
    use_context::<FeedRefresh>()
}

/// Like `use_resource`, but also reruns whenever [`FeedRefresh`] is bumped.
/// Pages showing server data load through this so that creating a post or an
/// activity refreshes whatever is on screen.
pub fn use_refreshing_resource<T, F>(mut future: impl FnMut() -> F + 'static) -> Resource<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    let refresh = use_feed_refresh();
    use_resource(move || {
        let _generation = refresh.generation();
        future()
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    static LOADS: AtomicUsize = AtomicUsize::new(0);

    fn app() -> Element {
        let mut refresh = use_feed_refresh_provider();
        let _loaded = use_refreshing_resource(|| async {
            LOADS.fetch_add(1, Ordering::SeqCst);
        });
        use_hook(move || {
            spawn(async move { refresh.bump() });
        });
        rsx! {}
    }

    #[tokio::test]
    async fn test_bump_reloads_resource() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        for _ in 0..10 {
            if LOADS.load(Ordering::SeqCst) >= 2 {
                break;
            }
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }
        assert_eq!(LOADS.load(Ordering::SeqCst), 2);
    }
}
