use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

const CONFIG_PATH_REL_HOME: &str = ".config/pingguard/config.toml";
const STORE_PATH_REL_HOME: &str = ".config/pingguard/users.json";
const DEFAULT_NAMESPACE: &str = "users";
/// Environment variable which takes precedence over `general.discord_token`
pub const TOKEN_ENV_VAR: &str = "BOTTOKEN";
/// Placeholder in `general.bot_ping_message` replaced with the command prefix
const PREFIX_PLACEHOLDER: &str = "{cmdPrefix}";

/// Bot configuration
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub general: General,
    #[serde(default)]
    pub action: Action,
    #[serde(default)]
    pub database: Database,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct General {
    pub discord_token: Option<String>,
    pub application_id: Option<u64>,
    pub command_prefix: String,
    pub bot_ping_message: Option<String>,
}

/// What to do with a message that mentions someone who opted out
#[derive(Default, serde::Serialize, serde::Deserialize)]
pub struct Action {
    #[serde(default)]
    pub delete_message: bool,
    pub react_emoji: Option<String>,
}

#[derive(Default, serde::Serialize, serde::Deserialize)]
pub struct Database {
    #[serde(default)]
    pub backend: Backend,
    pub path: Option<PathBuf>,
    pub namespace: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Json,
    Memory,
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|p| p.join(CONFIG_PATH_REL_HOME))
            .ok_or(anyhow!("Could not find home directory"))
    }

    pub async fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut file = tokio::fs::File::open(&path).await.map_err(|e| {
            anyhow!(
                "Could not open configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).await.map_err(|e| {
            anyhow!(
                "Could not read configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        Self::parse(&contents).map_err(|e| {
            anyhow!(
                "Could not parse configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;

        if config.general.command_prefix.is_empty() {
            return Err(anyhow!("`general.command_prefix` must not be empty"));
        }

        Ok(config)
    }

    /// Discord bot token.  The environment wins over the configuration file.
    pub fn discord_token(&self, env_token: Option<String>) -> Result<String> {
        env_token
            .filter(|token| !token.is_empty())
            .or_else(|| {
                self.general
                    .discord_token
                    .clone()
                    .filter(|token| !token.is_empty())
            })
            .ok_or(anyhow!(
                "Missing bot token!  Set `{}` or `general.discord_token`",
                TOKEN_ENV_VAR
            ))
    }
}

impl General {
    /// Reply for messages which mention the bot itself, if configured
    pub fn bot_ping_reply(&self) -> Option<String> {
        self.bot_ping_message
            .as_deref()
            .filter(|msg| !msg.is_empty())
            .map(|msg| msg.replace(PREFIX_PLACEHOLDER, &self.command_prefix))
    }

    pub fn invite_url(&self) -> Option<String> {
        self.application_id.map(|id| {
            format!(
                "https://discord.com/oauth2/authorize?client_id={}&scope=bot",
                id
            )
        })
    }
}

impl Action {
    pub fn react_emoji(&self) -> Option<&str> {
        self.react_emoji.as_deref().filter(|emoji| !emoji.is_empty())
    }
}

impl Database {
    pub fn path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => dirs::home_dir()
                .map(|p| p.join(STORE_PATH_REL_HOME))
                .ok_or(anyhow!("Could not find home directory")),
        }
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [general]
        discord_token = "file-token"
        application_id = 1234
        command_prefix = "!"
        bot_ping_message = "Use {cmdPrefix}help"

        [action]
        delete_message = true
        react_emoji = "🔇"

        [database]
        backend = "memory"
        path = "/tmp/users.json"
        namespace = "people"
    "#;

    #[test]
    fn parses_full_config() {
        let cfg = Config::parse(FULL).unwrap();
        assert_eq!(cfg.general.command_prefix, "!");
        assert!(cfg.action.delete_message);
        assert_eq!(cfg.action.react_emoji(), Some("🔇"));
        assert_eq!(cfg.database.backend, Backend::Memory);
        assert_eq!(cfg.database.path().unwrap(), PathBuf::from("/tmp/users.json"));
        assert_eq!(cfg.database.namespace(), "people");
    }

    #[test]
    fn example_config_parses() {
        let cfg = Config::parse(include_str!("../config.example.toml")).unwrap();
        assert_eq!(cfg.general.command_prefix, "!pingwarn");
        assert_eq!(cfg.database.backend, Backend::Json);
        assert!(cfg.discord_token(None).is_err());
    }

    #[test]
    fn optional_sections_default() {
        let cfg = Config::parse("[general]\ncommand_prefix = \"!\"\n").unwrap();
        assert!(!cfg.action.delete_message);
        assert_eq!(cfg.action.react_emoji(), None);
        assert_eq!(cfg.database.backend, Backend::Json);
        assert_eq!(cfg.database.namespace(), "users");
        assert_eq!(cfg.general.bot_ping_reply(), None);
        assert_eq!(cfg.general.invite_url(), None);
    }

    #[test]
    fn rejects_empty_prefix() {
        assert!(Config::parse("[general]\ncommand_prefix = \"\"\n").is_err());
    }

    #[test]
    fn empty_emoji_means_no_reaction() {
        let cfg =
            Config::parse("[general]\ncommand_prefix = \"!\"\n[action]\nreact_emoji = \"\"\n")
                .unwrap();
        assert_eq!(cfg.action.react_emoji(), None);
    }

    #[test]
    fn bot_ping_reply_substitutes_prefix() {
        let cfg = Config::parse(FULL).unwrap();
        assert_eq!(cfg.general.bot_ping_reply().as_deref(), Some("Use !help"));
    }

    #[test]
    fn bot_ping_reply_substitutes_every_placeholder() {
        let cfg = Config::parse(
            "[general]\ncommand_prefix = \"!\"\nbot_ping_message = \"{cmdPrefix} or {cmdPrefix}help\"\n",
        )
        .unwrap();
        assert_eq!(cfg.general.bot_ping_reply().as_deref(), Some("! or !help"));
    }

    #[test]
    fn invite_url_uses_application_id() {
        let cfg = Config::parse(FULL).unwrap();
        assert_eq!(
            cfg.general.invite_url().as_deref(),
            Some("https://discord.com/oauth2/authorize?client_id=1234&scope=bot")
        );
    }

    #[test]
    fn env_token_takes_precedence() {
        let cfg = Config::parse(FULL).unwrap();
        assert_eq!(cfg.discord_token(Some("env-token".into())).unwrap(), "env-token");
        assert_eq!(cfg.discord_token(Some(String::new())).unwrap(), "file-token");
        assert_eq!(cfg.discord_token(None).unwrap(), "file-token");
    }

    #[test]
    fn missing_token_is_an_error() {
        let cfg = Config::parse("[general]\ncommand_prefix = \"!\"\n").unwrap();
        assert!(cfg.discord_token(None).is_err());
    }
}
