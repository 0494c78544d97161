use super::{LookupConfig, DEFAULT_BASE_URL, DEFAULT_DATE, DEFAULT_HEADCODE, DEFAULT_TIMEOUT_SECONDS};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "headcode-lookup")]
#[command(about = "Find train services running under a headcode")]
pub struct CliConfig {
    /// Headcode to look up, e.g. 2S80
    #[arg(default_value = DEFAULT_HEADCODE)]
    pub headcode: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Service date (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_DATE)]
    pub date: NaiveDate,

    /// Arrival location filter; empty matches everything
    #[arg(long, default_value = "")]
    pub arrival: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl From<CliConfig> for LookupConfig {
    fn from(cli: CliConfig) -> Self {
        Self {
            headcode: cli.headcode,
            base_url: cli.base_url,
            date: cli.date,
            arrival: cli.arrival,
            timeout_seconds: cli.timeout_seconds,
            verbose: cli.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_lookup_config() {
        let cli = CliConfig::try_parse_from(["headcode-lookup"]).unwrap();
        assert_eq!(LookupConfig::from(cli), LookupConfig::default());
    }

    #[test]
    fn test_positional_headcode_and_overrides() {
        let cli = CliConfig::try_parse_from([
            "headcode-lookup",
            "1A23",
            "--date",
            "2024-05-01",
            "--timeout-seconds",
            "30",
            "-v",
        ])
        .unwrap();
        let config = LookupConfig::from(cli);
        assert_eq!(config.headcode, "1A23");
        assert_eq!(config.date.to_string(), "2024-05-01");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_malformed_date() {
        assert!(CliConfig::try_parse_from(["headcode-lookup", "--date", "12/03/2024"]).is_err());
    }
}
