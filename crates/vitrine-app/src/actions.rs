//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tracing::warn;

use crate::handler::UpdateAction;
use crate::message::Message;
use vitrine_store::StoreClient;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: &StoreClient) {
    match action {
        UpdateAction::FetchProducts => {
            let client = client.clone();
            tokio::spawn(async move {
                let message = match client.fetch_products().await {
                    Ok(response) => Message::ProductsLoaded(response),
                    Err(e) => {
                        warn!("Product fetch failed: {}", e);
                        Message::ProductsLoadFailed {
                            error: e.user_message(),
                        }
                    }
                };
                // If the app quit while the fetch was in flight the receiver
                // is gone and the result is simply discarded.
                let _ = msg_tx.send(message).await;
            });
        }
    }
}
