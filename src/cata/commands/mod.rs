use crate::config::CataConfig;
use crate::model::Coffee;
use crate::view::Facets;

pub mod config;
pub mod create;
pub mod delete;
pub mod facets;
pub mod favorite;
pub mod helpers;
pub mod import;
pub mod list;
pub mod share;
pub mod show;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Coffee>,
    pub listed: Vec<Coffee>,
    pub facets: Option<Facets>,
    pub text: Option<String>,
    pub config: Option<CataConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, coffees: Vec<Coffee>) -> Self {
        self.affected = coffees;
        self
    }

    pub fn with_listed(mut self, coffees: Vec<Coffee>) -> Self {
        self.listed = coffees;
        self
    }

    pub fn with_facets(mut self, facets: Facets) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_config(mut self, config: CataConfig) -> Self {
        self.config = Some(config);
        self
    }
}
