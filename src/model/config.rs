use serde::{Deserialize, Serialize};

use crate::model::user::User;

/// Configuration from slate.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub workspace: WorkspaceInfo,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// How far ahead the Later bucket reaches, in days
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            horizon_days: default_horizon_days(),
        }
    }
}

/// Default: one year ahead
fn default_horizon_days() -> u64 {
    365
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let config: WorkspaceConfig = toml::from_str(
            r#"[workspace]
name = "home"
"#,
        )
        .unwrap();
        assert_eq!(config.workspace.name, "home");
        assert_eq!(config.settings.horizon_days, 365);
        assert!(config.users.is_empty());
    }

    #[test]
    fn users_parse_from_tables() {
        let config: WorkspaceConfig = toml::from_str(
            r#"[workspace]
name = "home"

[settings]
horizon_days = 90

[[users]]
name = "Dana"
email = "dana@example.com"
password = "hunter2"
"#,
        )
        .unwrap();
        assert_eq!(config.settings.horizon_days, 90);
        assert_eq!(config.users.len(), 1);
        assert_eq!(config.users[0].email, "dana@example.com");
    }
}
