use crate::{chat::ChatClient, config::Config, preferences::PreferenceStore};
use serenity::all::UserId;

/// Collection of data that is shared across events
pub struct Context<'a> {
    // pingguard's own context types
    pub cfg: &'a Config,
    pub prefs: &'a PreferenceStore,
    // Chat platform
    pub chat: &'a dyn ChatClient,
    /// The bot's own user id
    pub bot_id: UserId,
}
