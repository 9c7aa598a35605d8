use log::{LevelFilter, info, warn};

const DEFAULT_MIRRORS: &str = "https://wiralis.ru,https://wiralis.online";
const DEFAULT_BOT_URL: &str = "https://t.me/wiralis_bot";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Site settings, baked in at build time from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// API base URLs, tried in order.
    pub api_mirrors: Vec<String>,
    pub bot_url: String,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn load() -> Self {
        Self::from_values(
            option_env!("WIRALIS_API_MIRRORS"),
            option_env!("WIRALIS_BOT_URL"),
            option_env!("WIRALIS_LOG"),
        )
    }

    pub fn from_values(
        mirrors: Option<&str>,
        bot_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let mirrors = parse_mirrors(or_default("WIRALIS_API_MIRRORS", mirrors, DEFAULT_MIRRORS));
        let api_mirrors = if mirrors.is_empty() {
            warn!("WIRALIS_API_MIRRORS has no usable entries, using default");
            parse_mirrors(DEFAULT_MIRRORS)
        } else {
            mirrors
        };
        let log_level = or_default("WIRALIS_LOG", log_level, DEFAULT_LOG_LEVEL)
            .parse()
            .unwrap_or_else(|e| {
                warn!("Invalid WIRALIS_LOG value: {e}");
                LevelFilter::Info
            });
        Self {
            api_mirrors,
            bot_url: or_default("WIRALIS_BOT_URL", bot_url, DEFAULT_BOT_URL).to_string(),
            log_level,
        }
    }

    /// Primary site URL, used for outbound links.
    pub fn primary_mirror(&self) -> &str {
        self.api_mirrors
            .first()
            .map(String::as_str)
            .unwrap_or("https://wiralis.ru")
    }
}

fn or_default<'a>(key: &str, value: Option<&'a str>, default: &'a str) -> &'a str {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v,
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

fn parse_mirrors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
