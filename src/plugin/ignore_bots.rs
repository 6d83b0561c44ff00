use crate::{event::*, plugin::*};
use anyhow::Result;

/// Swallows messages from bots, including our own, and anything sent outside a guild.
pub struct PluginIgnoreBots;

#[serenity::async_trait]
impl Plugin for PluginIgnoreBots {
    fn name(&self) -> &'static str {
        "ignore_bots"
    }

    async fn handle(&self, _ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::Message(msg) = event else {
            return Ok(EventHandled::No);
        };

        if msg.author.bot || msg.guild_id.is_none() {
            Ok(EventHandled::Yes)
        } else {
            Ok(EventHandled::No)
        }
    }
}
