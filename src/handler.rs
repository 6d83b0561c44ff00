use crate::{
    chat::{ChatClient, SerenityChat},
    config::Config,
    context::Context,
    event::{Event, ReadyInfo},
    helper::MessageHelper,
    preferences::PreferenceStore,
};
use serenity::all::{Message, Ready};

/// Discord event handler
pub struct Handler {
    cfg: Config,
    prefs: PreferenceStore,
}

impl Handler {
    pub fn new(cfg: Config, prefs: PreferenceStore) -> Self {
        Self { cfg, prefs }
    }

    fn ctx<'a>(
        &'a self,
        chat: &'a dyn ChatClient,
        discord_ctx: &serenity::all::Context,
    ) -> Context<'a> {
        Context {
            cfg: &self.cfg,
            prefs: &self.prefs,
            chat,
            bot_id: discord_ctx.cache.current_user().id,
        }
    }
}

#[serenity::async_trait]
impl serenity::all::EventHandler for Handler {
    async fn ready(&self, discord_ctx: serenity::all::Context, ready: Ready) {
        let info = ReadyInfo {
            user_tag: ready.user.tag(),
            guild_count: ready.guilds.len(),
        };
        let chat = SerenityChat::new(&discord_ctx);
        Event::Ready(info).handle(self.ctx(&chat, &discord_ctx)).await;
    }

    async fn message(&self, discord_ctx: serenity::all::Context, msg: Message) {
        // Cache lookups happen here, before anything is awaited.
        let msg = msg.to_chat_message(&discord_ctx.cache);
        let chat = SerenityChat::new(&discord_ctx);
        Event::Message(msg).handle(self.ctx(&chat, &discord_ctx)).await;
    }
}
