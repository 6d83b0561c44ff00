use crate::{event::*, log_internal, plugin::*};
use anyhow::Result;

/// Announces the login once the connection to Discord is ready.
pub struct PluginReady;

#[serenity::async_trait]
impl Plugin for PluginReady {
    fn name(&self) -> &'static str {
        "ready"
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::Ready(ready) = event else {
            return Ok(EventHandled::No);
        };

        log_internal!("Logged in as {}!", ready.user_tag);
        if let Some(url) = ctx.cfg.general.invite_url() {
            log_internal!("Add this bot to a server: {}", url);
        }

        Ok(EventHandled::Yes)
    }
}
