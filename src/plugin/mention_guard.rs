use crate::{
    chat::{ChatMessage, Mentioned},
    event::*,
    log_internal,
    plugin::*,
};
use anyhow::Result;
use serenity::all::GuildId;

/// Warns about, and optionally removes, messages which mention members who opted out of mentions
/// in this guild.
pub struct PluginMentionGuard;

#[serenity::async_trait]
impl Plugin for PluginMentionGuard {
    fn name(&self) -> &'static str {
        "mention_guard"
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::Message(msg) = event else {
            return Ok(EventHandled::No);
        };
        let Some(guild_id) = msg.guild_id else {
            return Ok(EventHandled::No);
        };

        let affected = affected_users(ctx, msg, guild_id).await?;
        if affected.is_empty() {
            return Ok(EventHandled::No);
        }

        log_internal!(
            "{} mentioned {} opted-out user(s) in {}",
            msg.author.name,
            affected.len(),
            guild_id
        );

        // Each step needs the original message, so deleting comes last.
        let action = &ctx.cfg.action;
        if !action.delete_message {
            if let Some(emoji) = action.react_emoji() {
                ctx.chat.react(msg.reference, emoji).await?;
            }
        }
        ctx.chat.reply(msg.reference, &notice(&affected)).await?;
        if action.delete_message && msg.deletable {
            ctx.chat.delete(msg.reference).await?;
        }

        // A mention of the bot in the same message still deserves its own reply.
        Ok(EventHandled::No)
    }
}

/// Mentioned guild members who opted out of mentions in `guild_id`
async fn affected_users<'m>(
    ctx: &Context<'_>,
    msg: &'m ChatMessage,
    guild_id: GuildId,
) -> Result<Vec<&'m Mentioned>> {
    let guild_key = guild_id.to_string();
    let mut affected = Vec::new();
    for user in msg.mentions.iter().filter(|m| m.is_member()) {
        if ctx
            .prefs
            .is_opted_out(&user.id().to_string(), &guild_key)
            .await?
        {
            affected.push(user);
        }
    }
    Ok(affected)
}

fn notice(affected: &[&Mentioned]) -> String {
    let names = affected
        .iter()
        .map(|user| user.display_name())
        .collect::<Vec<&str>>()
        .join(", ");
    let verb = if affected.len() == 1 { "has" } else { "have" };
    format!(
        "**{}** {} mentions disabled. Please don't ping them!",
        names, verb
    )
}
