use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{messaging::types::IncomingUpdate, navigation::Navigator};

/// Pull updates one at a time and dispatch each to completion.
///
/// The shutdown token is only checked between updates, so an in-flight
/// dispatch is never cut short. Returns the number of dispatched updates.
pub async fn run(
    mut updates: mpsc::UnboundedReceiver<IncomingUpdate>,
    navigator: &Navigator,
    shutdown: CancellationToken,
) -> usize {
    let mut dispatched = 0usize;

    loop {
        let update = tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!(dispatched, "shutdown requested, leaving event loop");
                break;
            }
            next = updates.recv() => match next {
                Some(update) => update,
                None => {
                    info!(dispatched, "update stream closed, leaving event loop");
                    break;
                }
            },
        };

        navigator.handle(update).await;
        dispatched += 1;
    }

    dispatched
}
