use crate::{event::*, log_event, plugin::*};
use anyhow::Result;

/// Logs every event
pub struct PluginDebug;

#[serenity::async_trait]
impl Plugin for PluginDebug {
    fn name(&self) -> &'static str {
        "debug"
    }

    async fn handle(&self, _ctx: &Context, event: &Event) -> Result<EventHandled> {
        match event {
            Event::Ready(ready) => {
                log_event!(
                    "Connected to {} server(s) as {}",
                    ready.guild_count,
                    ready.user_tag
                );
            }
            Event::Message(msg) => {
                let guild = msg
                    .guild_id
                    .map(|id| id.to_string())
                    .unwrap_or("<direct-message>".to_owned());
                tracing::debug!(
                    target: "pingguard::event",
                    "{}:{}:{} {}",
                    guild,
                    msg.reference.channel_id,
                    msg.author.name,
                    msg.content
                );
            }
        }

        Ok(EventHandled::No)
    }
}
