//! Platform-neutral view of chat messages and the actions the bot takes on them.
//!
//! Serenity types are converted into these once, when an event arrives (see `crate::helper`), so
//! plugins never need to know whether a mentioned user came with guild member data or not.

use anyhow::Result;
use serenity::all::{
    ChannelId, CreateAllowedMentions, CreateMessage, GuildId, MessageId, ReactionType, UserId,
};

/// Where a message lives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageRef {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

#[derive(Clone, Debug)]
pub struct Author {
    pub id: UserId,
    pub name: String,
    pub bot: bool,
}

/// Someone mentioned in a message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mentioned {
    /// Mentioned with guild member data attached
    Member {
        id: UserId,
        nick: Option<String>,
        name: String,
    },
    /// Mentioned without guild member data, e.g. not (or no longer) in the guild
    User { id: UserId, name: String },
}

impl Mentioned {
    pub fn id(&self) -> UserId {
        match self {
            Mentioned::Member { id, .. } | Mentioned::User { id, .. } => *id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Mentioned::Member {
                nick: Some(nick), ..
            } => nick,
            Mentioned::Member { name, .. } | Mentioned::User { name, .. } => name,
        }
    }

    pub fn is_member(&self) -> bool {
        matches!(self, Mentioned::Member { .. })
    }
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub reference: MessageRef,
    pub author: Author,
    /// None for direct messages
    pub guild_id: Option<GuildId>,
    pub content: String,
    pub mentions: Vec<Mentioned>,
    /// Whether the bot is allowed to delete this message
    pub deletable: bool,
}

impl ChatMessage {
    pub fn mentions_user(&self, user_id: UserId) -> bool {
        self.mentions.iter().any(|m| m.id() == user_id)
    }
}

/// Outbound actions against the chat platform
#[serenity::async_trait]
pub trait ChatClient: Send + Sync {
    async fn react(&self, target: MessageRef, emoji: &str) -> Result<()>;
    /// Inline reply which pings the author of `target` and nobody else
    async fn reply(&self, target: MessageRef, content: &str) -> Result<()>;
    async fn delete(&self, target: MessageRef) -> Result<()>;
}

/// `ChatClient` over serenity's HTTP client
pub struct SerenityChat<'a> {
    ctx: &'a serenity::all::Context,
}

impl<'a> SerenityChat<'a> {
    pub fn new(ctx: &'a serenity::all::Context) -> Self {
        Self { ctx }
    }
}

#[serenity::async_trait]
impl ChatClient for SerenityChat<'_> {
    async fn react(&self, target: MessageRef, emoji: &str) -> Result<()> {
        // Custom emoji look like `<:name:id>`, anything else is sent as unicode.
        let reaction = ReactionType::try_from(emoji)
            .unwrap_or_else(|_| ReactionType::Unicode(emoji.to_owned()));
        self.ctx
            .http
            .create_reaction(target.channel_id, target.message_id, &reaction)
            .await?;
        Ok(())
    }

    async fn reply(&self, target: MessageRef, content: &str) -> Result<()> {
        let message = CreateMessage::new()
            .content(content)
            .reference_message((target.channel_id, target.message_id))
            .allowed_mentions(CreateAllowedMentions::new().replied_user(true));
        target.channel_id.send_message(self.ctx, message).await?;
        Ok(())
    }

    async fn delete(&self, target: MessageRef) -> Result<()> {
        target
            .channel_id
            .delete_message(&self.ctx.http, target.message_id)
            .await?;
        Ok(())
    }
}
