//! Push-based screen updates.

use bizboard_core::{LedgerEvent, LedgerStore, LedgerView, SubscriptionId};
use tokio::sync::watch;
use tracing::trace;

/// Keeps a screen up to date by rebuilding it on every ledger change.
///
/// The rebuilt screen is published through a [`watch`] channel, so any
/// number of readers see the latest state and can `await` the next change.
pub struct ScreenFeed;

impl ScreenFeed {
    /// Subscribe `build` to `store`.
    ///
    /// The receiver starts out holding the screen for the current ledger. The
    /// returned id can be passed to [`LedgerStore::unsubscribe`] to stop the
    /// feed. Once every receiver is dropped the screen is no longer rebuilt.
    pub fn attach<T, F>(store: &mut LedgerStore, build: F) -> (SubscriptionId, watch::Receiver<T>)
    where
        T: Send + Sync + 'static,
        F: Fn(&LedgerView<'_>) -> T + Send + 'static,
    {
        let (tx, rx) = watch::channel(build(&store.view()));

        let id = store.subscribe(move |event: &LedgerEvent, ledger: &LedgerView<'_>| {
            if tx.is_closed() {
                trace!(event = event.kind(), "screen feed has no readers");
                return;
            }
            tx.send_replace(build(ledger));
        });

        (id, rx)
    }
}
