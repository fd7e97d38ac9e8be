//! WebSocket connection handlers.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, Frame},
    infrastructure::{dto::conversion::frame_from_message, peer_channel::WebSocketPeerChannel},
    ui::state::AppState,
};

/// How long the writer may take to flush queued frames and the close reply
/// after the reader has finished.
const CLOSE_GRACE: Duration = Duration::from_secs(1);

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the peer's outbound queue into its WebSocket sink.
///
/// Frames relayed from other peers arrive on `rx` in the order they were
/// pushed and are written with their original opcode. Once the queue is
/// closed the sink is closed too, which completes the close handshake.
fn writer_loop(
    id: ConnectionId,
    mut rx: mpsc::Receiver<Frame>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if let Err(e) = sender.send(Message::from(frame)).await {
                tracing::debug!("Failed to write to '{}': {}", id, e);
                return;
            }
        }
        if let Err(e) = sender.close().await {
            tracing::debug!("Failed to close '{}': {}", id, e);
        }
    })
}

/// Drives one connection from open to close.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let id = ConnectionIdFactory::generate();
    let (sender, mut receiver) = socket.split();

    let (channel, rx) = WebSocketPeerChannel::new(state.peer_buffer, state.send_timeout);
    state
        .connect_peer_usecase
        .execute(id, Arc::new(channel))
        .await;

    let mut send_task = writer_loop(id, rx, sender);

    let relay_message_usecase = state.relay_message_usecase.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", id, e);
                    break;
                }
            };

            if let Message::Close(_) = msg {
                tracing::debug!("Peer '{}' requested close", id);
                break;
            }

            match frame_from_message(msg) {
                Some(frame) => {
                    relay_message_usecase.execute(&id, frame).await;
                }
                // Ping/pong is handled by the WebSocket protocol
                None => tracing::trace!("Ignoring control frame from '{}'", id),
            }
        }
    });

    // A dead writer ends the reader. A finished reader lets the writer
    // flush until the registry drops this peer's channel.
    let writer_finished = tokio::select! {
        _ = &mut recv_task => false,
        _ = &mut send_task => {
            recv_task.abort();
            true
        },
    };

    state.disconnect_peer_usecase.execute(&id).await;

    if !writer_finished && tokio::time::timeout(CLOSE_GRACE, &mut send_task).await.is_err() {
        tracing::debug!("Writer for '{}' did not finish in time, aborting", id);
        send_task.abort();
    }
}
