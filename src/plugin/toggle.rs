use crate::{event::*, plugin::*};
use anyhow::{anyhow, Result};

/// Flips whether the author may be mentioned in the current guild
pub struct PluginToggle;

#[serenity::async_trait]
impl Plugin for PluginToggle {
    fn name(&self) -> &'static str {
        "toggle"
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Some(msg) = event.is_bot_cmd(ctx) else {
            return Ok(EventHandled::No);
        };
        let guild_id = msg
            .guild_id
            .ok_or(anyhow!("toggle command outside of a guild"))?;

        let enabled = ctx
            .prefs
            .toggle(&msg.author.id.to_string(), &guild_id.to_string())
            .await?;

        ctx.chat.reply(msg.reference, &confirmation(enabled)).await?;
        Ok(EventHandled::Yes)
    }
}

fn confirmation(enabled: bool) -> String {
    let state = if enabled { "enabled" } else { "disabled" };
    format!("Ping warning **{}**.", state)
}
