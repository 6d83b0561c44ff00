//! The Serenity crate we're using for the Discord API is designed around callbacks to handle
//! events.  However, this does not mesh well with our plugin framework here.  To resolve this,
//! the handler translates the callbacks into a distinct Event enum.

use crate::{chat::ChatMessage, context::Context};
use tracing::error;

/// A Discord event
pub enum Event {
    Ready(ReadyInfo),
    Message(ChatMessage),
}

/// What we keep from serenity's `Ready` payload
pub struct ReadyInfo {
    pub user_tag: String,
    pub guild_count: usize,
}

impl Event {
    // When an event occurs, iterate over all the plugins to see if any can/should handle it.
    pub async fn handle(self, ctx: Context<'_>) {
        for plugin in crate::plugin::plugins() {
            match plugin.handle(&ctx, &self).await {
                Ok(EventHandled::Yes) => return,
                Ok(EventHandled::No) => continue,
                Err(err) => {
                    // Failures only affect this one event.
                    error!("Error in plugin {}: {:#}", plugin.name(), err);
                    return;
                }
            }
        }
    }

    /// Check if a message should be interpreted as a bot command, i.e. starts with the
    /// configured command prefix.
    pub fn is_bot_cmd(&self, ctx: &Context) -> Option<&ChatMessage> {
        match self {
            Event::Message(msg) if msg.content.starts_with(&ctx.cfg.general.command_prefix) => {
                Some(msg)
            }
            _ => None,
        }
    }
}

pub enum EventHandled {
    Yes,
    No,
}
