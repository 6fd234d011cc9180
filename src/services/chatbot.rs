use tracing::error;

use super::knowledge_base::build_context;
use super::provider::ChatProvider;
use crate::error::AppError;
use crate::message::ValidChat;

/// One relay turn: fixed context for the requested language, then the user's message.
pub async fn generate_reply(provider: &dyn ChatProvider, chat: &ValidChat) -> Result<String, AppError> {
    let context = build_context(&chat.language);

    provider
        .complete(&context, &chat.message)
        .await
        .map_err(|e| {
            error!(error = %e, language = %chat.language, "Error processing chat");
            AppError::Upstream(e)
        })
}
