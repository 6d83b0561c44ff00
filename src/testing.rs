//! Test doubles for driving events through the plugin chain without Discord.

use crate::{
    chat::{Author, ChatClient, ChatMessage, Mentioned, MessageRef},
    config::Config,
    context::Context,
    preferences::PreferenceStore,
    store::{KeyValueStore, MemoryStore, StoreError},
};
use anyhow::{anyhow, Result};
use serenity::all::{ChannelId, GuildId, MessageId, UserId};
use std::sync::Mutex;

pub const BOT_ID: u64 = 999;
pub const GUILD_ID: u64 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    React(MessageRef, String),
    Reply(MessageRef, String),
    Delete(MessageRef),
}

/// Records every action in the order it was requested
#[derive(Default)]
pub struct RecordingChat {
    actions: Mutex<Vec<Action>>,
    fail_replies: bool,
}

impl RecordingChat {
    pub fn failing_replies() -> Self {
        Self {
            fail_replies: true,
            ..Self::default()
        }
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }

    fn record(&self, action: Action) {
        self.actions.lock().unwrap().push(action);
    }
}

#[serenity::async_trait]
impl ChatClient for RecordingChat {
    async fn react(&self, target: MessageRef, emoji: &str) -> Result<()> {
        self.record(Action::React(target, emoji.to_owned()));
        Ok(())
    }

    async fn reply(&self, target: MessageRef, content: &str) -> Result<()> {
        if self.fail_replies {
            return Err(anyhow!("reply rejected"));
        }
        self.record(Action::Reply(target, content.to_owned()));
        Ok(())
    }

    async fn delete(&self, target: MessageRef) -> Result<()> {
        self.record(Action::Delete(target));
        Ok(())
    }
}

pub fn config(action: &str) -> Config {
    Config::parse(&format!(
        "[general]\n\
         command_prefix = \"!\"\n\
         bot_ping_message = \"Use {{cmdPrefix}}help\"\n\
         [action]\n\
         {}\n",
        action
    ))
    .unwrap()
}

pub fn prefs() -> PreferenceStore {
    PreferenceStore::new(Box::new(MemoryStore::new("users")))
}

/// Backend whose every operation fails with an I/O error
pub struct BrokenStore;

#[serenity::async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(broken())
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(broken())
    }

    async fn delete(&self, _key: &str) -> Result<bool, StoreError> {
        Err(broken())
    }
}

fn broken() -> StoreError {
    StoreError::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionReset,
        "store unavailable",
    ))
}

pub fn broken_prefs() -> PreferenceStore {
    PreferenceStore::new(Box::new(BrokenStore))
}

pub fn ctx<'a>(
    cfg: &'a Config,
    prefs: &'a PreferenceStore,
    chat: &'a RecordingChat,
) -> Context<'a> {
    Context {
        cfg,
        prefs,
        chat,
        bot_id: UserId::new(BOT_ID),
    }
}

pub fn member(id: u64, name: &str) -> Mentioned {
    Mentioned::Member {
        id: UserId::new(id),
        nick: None,
        name: name.to_owned(),
    }
}

pub fn message(author: u64, content: &str, mentions: Vec<Mentioned>) -> ChatMessage {
    ChatMessage {
        reference: reference(),
        author: Author {
            id: UserId::new(author),
            name: format!("user{}", author),
            bot: false,
        },
        guild_id: Some(GuildId::new(GUILD_ID)),
        content: content.to_owned(),
        mentions,
        deletable: true,
    }
}

pub fn reference() -> MessageRef {
    MessageRef {
        channel_id: ChannelId::new(10),
        message_id: MessageId::new(20),
    }
}
