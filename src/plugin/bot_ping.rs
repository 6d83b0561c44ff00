use crate::{event::*, plugin::*};
use anyhow::Result;

/// Answers messages which mention the bot itself with the configured text
pub struct PluginBotPing;

#[serenity::async_trait]
impl Plugin for PluginBotPing {
    fn name(&self) -> &'static str {
        "bot_ping"
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::Message(msg) = event else {
            return Ok(EventHandled::No);
        };

        if !msg.mentions_user(ctx.bot_id) {
            return Ok(EventHandled::No);
        }
        let Some(reply) = ctx.cfg.general.bot_ping_reply() else {
            return Ok(EventHandled::No);
        };

        ctx.chat.reply(msg.reference, &reply).await?;
        Ok(EventHandled::Yes)
    }
}
