//! Message processing - the TEA update loop with follow-up handling

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use vitrine_store::StoreClient;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed in the same pass; actions are handed to
/// the action layer, which spawns background tasks reporting back through
/// `msg_tx`.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &StoreClient,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client);
        }

        msg = result.message;
    }
}
