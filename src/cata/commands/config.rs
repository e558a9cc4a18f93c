use crate::commands::{CmdMessage, CmdResult};
use crate::config::CataConfig;
use crate::error::{CataError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Print the whole config.
    Show,
    /// Print one key.
    Get(String),
    /// Set one key.
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = CataConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::Show => {}
        ConfigAction::Get(key) => match key.as_str() {
            "insights-model" => {
                result.add_message(CmdMessage::info(config.insights_model.clone()))
            }
            other => {
                return Err(CataError::Api(format!("Unknown config key: {}", other)));
            }
        },
        ConfigAction::Set(key, value) => match key.as_str() {
            "insights-model" => {
                config.insights_model = value;
                config.save(config_dir)?;
                result.add_message(CmdMessage::success("Config updated."));
            }
            other => {
                return Err(CataError::Api(format!("Unknown config key: {}", other)));
            }
        },
    }

    Ok(result.with_config(config))
}
