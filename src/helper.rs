//! Conversions from serenity types into the bot's own types

use crate::chat::{Author, ChatMessage, Mentioned, MessageRef};
use serenity::all::{Cache, Guild, Message, User, UserId};

pub trait UserHelper {
    fn as_mentioned(&self) -> Mentioned;
}

impl UserHelper for User {
    fn as_mentioned(&self) -> Mentioned {
        // Mentions in guild messages carry partial member data, which is where the nickname
        // lives.  Fall back to the global display name otherwise.
        let name = self.display_name().to_owned();
        match &self.member {
            Some(member) => Mentioned::Member {
                id: self.id,
                nick: member.nick.clone(),
                name,
            },
            None => Mentioned::User { id: self.id, name },
        }
    }
}

pub trait MessageHelper {
    fn to_chat_message(&self, cache: &Cache) -> ChatMessage;
    fn is_deletable(&self, cache: &Cache) -> bool;
}

impl MessageHelper for Message {
    fn to_chat_message(&self, cache: &Cache) -> ChatMessage {
        ChatMessage {
            reference: MessageRef {
                channel_id: self.channel_id,
                message_id: self.id,
            },
            author: Author {
                id: self.author.id,
                name: self.author.name.clone(),
                bot: self.author.bot,
            },
            guild_id: self.guild_id,
            content: self.content.clone(),
            mentions: self.mentions.iter().map(UserHelper::as_mentioned).collect(),
            deletable: self.is_deletable(cache),
        }
    }

    /// The bot may always delete its own messages.  Anything else needs the Manage Messages
    /// permission in the channel.  If the cache can't tell, assume we can't.
    fn is_deletable(&self, cache: &Cache) -> bool {
        let my_id = cache.current_user().id;
        if self.author.id == my_id {
            return true;
        }

        let Some(guild) = self.guild(cache) else {
            return false;
        };
        can_manage_messages(&guild, self, my_id)
    }
}

fn can_manage_messages(guild: &Guild, msg: &Message, my_id: UserId) -> bool {
    let Some(my_member) = guild.members.get(&my_id) else {
        return false;
    };

    // Threads inherit permissions from their parent channel.
    let channel = guild.channels.get(&msg.channel_id).or_else(|| {
        guild
            .threads
            .iter()
            .find(|thread| thread.id == msg.channel_id)
            .and_then(|thread| thread.parent_id)
            .and_then(|parent_id| guild.channels.get(&parent_id))
    });

    match channel {
        Some(channel) => guild
            .user_permissions_in(channel, my_member)
            .manage_messages(),
        None => false,
    }
}
