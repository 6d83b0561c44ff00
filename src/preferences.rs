//! Per-user mention preferences.
//!
//! Each user maps to the set of guilds in which they do not want to be mentioned.  An empty set is
//! never stored; the key is deleted instead, so "no record" and "empty set" mean the same thing:
//! mentions are fine everywhere.

use crate::store::{KeyValueStore, StoreError};
use std::collections::BTreeSet;
use tracing::warn;

/// Guild ids in which a user has opted out of being mentioned
pub type GuildSet = BTreeSet<String>;

pub struct PreferenceStore {
    backend: Box<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub async fn get_guild_set(&self, user_id: &str) -> Result<GuildSet, StoreError> {
        if user_id.is_empty() {
            return Err(StoreError::InvalidArgument("user_id"));
        }

        let Some(raw) = self.backend.get(user_id).await? else {
            return Ok(GuildSet::new());
        };

        // A damaged record is treated as no preference rather than failing the caller.
        match serde_json::from_str::<GuildSet>(&raw) {
            Ok(set) => Ok(set),
            Err(e) => {
                warn!(user_id, "Could not parse stored guild set: {}", e);
                Ok(GuildSet::new())
            }
        }
    }

    pub async fn set_guild_set(&self, user_id: &str, guild_set: &GuildSet) -> Result<(), StoreError> {
        if user_id.is_empty() {
            return Err(StoreError::InvalidArgument("user_id"));
        }
        if guild_set.iter().any(String::is_empty) {
            return Err(StoreError::InvalidArgument("guild_set"));
        }

        if guild_set.is_empty() {
            self.backend.delete(user_id).await?;
            return Ok(());
        }

        let serialized = serde_json::to_string(guild_set)?;
        self.backend.set(user_id, serialized).await
    }

    /// Flip whether `user_id` is opted out in `guild_id`.  Returns the new state, `true` meaning
    /// mentions are now suppressed.
    ///
    /// Not atomic: two concurrent toggles for the same user may lose one of the flips.
    pub async fn toggle(&self, user_id: &str, guild_id: &str) -> Result<bool, StoreError> {
        if guild_id.is_empty() {
            return Err(StoreError::InvalidArgument("guild_id"));
        }

        let mut guild_set = self.get_guild_set(user_id).await?;
        let enabled = if guild_set.remove(guild_id) {
            false
        } else {
            guild_set.insert(guild_id.to_owned());
            true
        };
        self.set_guild_set(user_id, &guild_set).await?;

        Ok(enabled)
    }

    pub async fn is_opted_out(&self, user_id: &str, guild_id: &str) -> Result<bool, StoreError> {
        Ok(self.get_guild_set(user_id).await?.contains(guild_id))
    }
}
