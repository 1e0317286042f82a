use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::session::SessionConfig;

pub mod dictionary;
pub mod session;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub session: SessionConfig,

    /// Matches shown per disambiguation page.
    pub page_size: usize,
}

impl Config {
    pub fn new() -> Self {
        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Config {
            dictionary: DictionaryConfig::new(),
            session: SessionConfig::new(),

            page_size,
        }
    }
}
