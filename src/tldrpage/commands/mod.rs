use crate::page::Page;
use std::path::PathBuf;

pub mod dirs;
pub mod edit;
pub mod helpers;
pub mod show;
pub mod update;

/// What to search: upstream source, platform, language, and an optional
/// restriction to a single candidate directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOptions {
    pub upstream_url: String,
    pub platform: String,
    pub language: String,
    pub index: Option<usize>,
}

impl LookupOptions {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into(),
            platform: String::new(),
            language: String::new(),
            index: None,
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_index(mut self, index: Option<usize>) -> Self {
        self.index = index;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub page: Option<Page>,
    pub candidate_dirs: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_candidate_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.candidate_dirs = dirs;
        self
    }
}
