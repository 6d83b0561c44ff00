use crate::{context::Context, event::EventHandled};
use anyhow::Result;

mod bot_ping;
mod debug;
mod ignore_bots;
mod mention_guard;
mod ready;
mod toggle;

#[serenity::async_trait]
pub trait Plugin: Sync + Send {
    /// Plugin name.  Used for debug
    fn name(&self) -> &'static str;
    /// Potentially handle event.  Returns:
    /// - Ok(EventHandled::Yes) if the event has been handled and no other plugin should attempt to
    /// handle it
    /// - Ok(EventHandled::No) if another plugin should attempt to handle the event
    /// - Err if an error occurred
    async fn handle(&self, ctx: &Context, event: &crate::event::Event) -> Result<EventHandled>;
}

/// Ordered list of available plugins
pub fn plugins() -> Vec<Box<dyn Plugin>> {
    vec![
        // Core bot operations
        Box::new(debug::PluginDebug),
        Box::new(ready::PluginReady),
        Box::new(ignore_bots::PluginIgnoreBots),
        // Commands.  Anything starting with the command prefix stops here.
        Box::new(toggle::PluginToggle),
        // Chat
        Box::new(mention_guard::PluginMentionGuard),
        Box::new(bot_ping::PluginBotPing),
    ]
}
