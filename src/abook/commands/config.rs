use crate::commands::{CmdMessage, CmdResult};
use crate::config::{AbookConfig, ConfigKey};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = AbookConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = AbookConfig::load(config_dir)?;
            let key = ConfigKey::parse(&key)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(key)));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = AbookConfig::load(config_dir)?;
            let key = ConfigKey::parse(&key)?;
            config.set(key, &value)?;
            config.save(config_dir)?;

            let mut result = CmdResult::default().with_config(config.clone());
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key.name(),
                config.get(key)
            )));
            Ok(result)
        }
    }
}
