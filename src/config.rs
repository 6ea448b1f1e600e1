use std::env;

pub const DEFAULT_HELPER: &str = "gh";
pub const DEFAULT_ACTIVITY_DAYS: u32 = 7;
pub const DEFAULT_MAX_PAGES: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub helper_program: String,
    pub activity_days: u32,
    pub max_pages: u32,
    pub no_color: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let helper_program = env::var("GH_STATS_BIN")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HELPER.to_string());

        let activity_days = env::var("GH_STATS_ACTIVITY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&d: &u32| d > 0)
            .unwrap_or(DEFAULT_ACTIVITY_DAYS);

        let max_pages = env::var("GH_STATS_MAX_PAGES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&p: &u32| p > 0)
            .unwrap_or(DEFAULT_MAX_PAGES);

        // https://no-color.org: any non-empty value disables color
        let no_color = env::var("NO_COLOR")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        Self {
            helper_program,
            activity_days,
            max_pages,
            no_color,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            helper_program: DEFAULT_HELPER.to_string(),
            activity_days: DEFAULT_ACTIVITY_DAYS,
            max_pages: DEFAULT_MAX_PAGES,
            no_color: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub helper_program: String,
    pub max_pages: u32,
}

impl From<&Config> for ClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            helper_program: config.helper_program.clone(),
            max_pages: config.max_pages,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
