use serde::Deserialize;

/// Default desktop-browser identification sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36";

/// Keywords that mark a link as a likely contact page
pub const DEFAULT_KEYWORDS: &[&str] = &["contact", "about", "get-in-touch", "contact-us", "about-us"];

/// Main configuration structure for the contact scraper
///
/// Every section and key is optional; missing values fall back to the
/// defaults below so the tool runs without a config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Wall-clock budget for one crawl run (seconds)
    #[serde(rename = "time-budget-secs")]
    pub time_budget_secs: u64,

    /// Keywords marking a link as a contact page (matched case-insensitively)
    pub keywords: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            time_budget_secs: 240,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Number of retries after a connection failure
    #[serde(rename = "connect-retries")]
    pub connect_retries: u32,

    /// Base delay of the exponential retry backoff (milliseconds)
    #[serde(rename = "backoff-base-ms")]
    pub backoff_base_ms: u64,

    /// Skip TLS certificate validation
    #[serde(rename = "accept-invalid-certs")]
    pub accept_invalid_certs: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            connect_retries: 3,
            backoff_base_ms: 500,
            accept_invalid_certs: true,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the CSV file written after a crawl
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "contact_info.csv".to_string(),
        }
    }
}
