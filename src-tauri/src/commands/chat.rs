use tracing::info;

use crate::error::InsightdeckError;

/// Upper bound on a single chat message, in characters.
pub const MAX_CHAT_MESSAGE_CHARS: usize = 4000;

/// Trim a chat message and reject blank or oversized input.
pub fn normalize_chat_message(message: &str) -> Result<&str, InsightdeckError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(InsightdeckError::Chat("Message cannot be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_CHAT_MESSAGE_CHARS {
        return Err(InsightdeckError::Chat(format!(
            "Message is longer than {} characters",
            MAX_CHAT_MESSAGE_CHARS
        )));
    }
    Ok(trimmed)
}

/// Accept a message from the floating chat widget.
///
/// There is no chat backend yet; the message is recorded in the log.
#[tauri::command]
pub fn submit_chat_message(agent_id: &str, message: &str) -> Result<(), String> {
    let message = normalize_chat_message(message)?;
    info!(
        "Chat message for agent '{}' ({} chars): {}",
        agent_id,
        message.chars().count(),
        message
    );
    Ok(())
}
