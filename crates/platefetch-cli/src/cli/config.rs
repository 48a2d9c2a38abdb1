use anyhow::bail;
use clap::{Args, Parser, Subcommand, ValueEnum};
use core::time::Duration;

/// Command-line arguments for the `platefetch` binary.
///
/// Every option can also come from the environment, so the binary can be
/// configured from a `.env` file when scripted.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "platefetch",
    version,
    about = "Sequential plate codes and bounded-concurrency URL fetching"
)]
pub struct CliArgs {
    /// Log output format on stderr.
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, multi-line events.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert between plate indices and plate codes.
    #[command(subcommand)]
    Plate(PlateCommand),

    /// Fetch URLs with a concurrency limit and print JSON outcomes.
    Fetch(FetchArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlateCommand {
    /// Print the plate code for an index.
    Encode {
        /// Decimal index, `0` through the maximum.
        #[arg(allow_negative_numbers = true)]
        index: String,
    },
    /// Print the index of a plate code.
    Decode {
        /// Six-character code, digits then upper-case letters.
        code: String,
    },
    /// Print the largest supported index and its code.
    Max,
    /// Print `count` consecutive plate codes starting at `start`.
    Range {
        /// Decimal index of the first code.
        #[arg(allow_negative_numbers = true)]
        start: String,
        /// Number of codes to print (clipped at the last code).
        #[arg(default_value_t = 10)]
        count: u64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Maximum number of requests in flight at once.
    ///
    /// Defaults to the number of logical CPUs.
    ///
    /// Environment variable: `FETCH_CONCURRENCY`
    #[arg(short, long, env = "FETCH_CONCURRENCY")]
    pub limit: Option<usize>,

    /// Per-request timeout of the HTTP client, in seconds.
    ///
    /// Environment variable: `FETCH_TIMEOUT_SECS`
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    ///
    /// Environment variable: `USER_AGENT`
    #[arg(long, env = "USER_AGENT", default_value = concat!("platefetch/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// URLs to fetch. Read from stdin, one per line, when omitted.
    pub urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    Plate(PlateCommand),
    Fetch(FetchConfig),
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Left as given; the fetch service rejects `0` with a user-facing message.
    pub limit: usize,
    pub timeout: Duration,
    pub user_agent: String,
    pub pretty: bool,
    pub urls: Vec<String>,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let action = match args.command {
            Command::Plate(plate) => Action::Plate(plate),
            Command::Fetch(fetch) => Action::Fetch(FetchConfig::try_from(fetch)?),
        };
        Ok(Self {
            log_format: args.log_format,
            action,
        })
    }
}

impl TryFrom<FetchArgs> for FetchConfig {
    type Error = anyhow::Error;

    fn try_from(args: FetchArgs) -> Result<Self, Self::Error> {
        if args.timeout_secs == 0 {
            bail!("FETCH_TIMEOUT_SECS must be greater than 0");
        }
        if args.user_agent.trim().is_empty() {
            bail!("USER_AGENT must not be empty");
        }

        let urls = args
            .urls
            .into_iter()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();

        Ok(Self {
            limit: args.limit.unwrap_or_else(num_cpus::get),
            timeout: Duration::from_secs(args.timeout_secs),
            user_agent: args.user_agent,
            pretty: args.pretty,
            urls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> anyhow::Result<Config> {
        let args = CliArgs::try_parse_from(argv)?;
        Config::try_from(args)
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn fetch_defaults_to_cpu_count() {
        let config = parse(&["platefetch", "fetch", "https://a.test"]).unwrap();
        let Action::Fetch(fetch) = config.action else {
            panic!("expected fetch action");
        };
        assert_eq!(fetch.limit, num_cpus::get());
        assert_eq!(fetch.timeout, Duration::from_secs(30));
        assert_eq!(fetch.urls, ["https://a.test"]);
        assert!(fetch.user_agent.starts_with("platefetch/"));
    }

    #[test]
    fn zero_limit_is_left_for_the_service() {
        let config = parse(&["platefetch", "fetch", "--limit", "0", "u"]).unwrap();
        let Action::Fetch(fetch) = config.action else {
            panic!("expected fetch action");
        };
        assert_eq!(fetch.limit, 0);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = parse(&["platefetch", "fetch", "--timeout-secs", "0", "u"]).unwrap_err();
        assert!(err.to_string().contains("FETCH_TIMEOUT_SECS"));
    }

    #[test]
    fn blank_urls_are_dropped() {
        let config = parse(&["platefetch", "fetch", " a ", "", "b"]).unwrap();
        let Action::Fetch(fetch) = config.action else {
            panic!("expected fetch action");
        };
        assert_eq!(fetch.urls, ["a", "b"]);
    }

    #[test]
    fn plate_subcommands_parse() {
        let config = parse(&["platefetch", "--log-format", "json", "plate", "encode", "42"]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(matches!(
            config.action,
            Action::Plate(PlateCommand::Encode { ref index }) if index == "42"
        ));

        let config = parse(&["platefetch", "plate", "range", "7"]).unwrap();
        assert!(matches!(
            config.action,
            Action::Plate(PlateCommand::Range { count: 10, .. })
        ));
    }

    #[test]
    fn negative_indices_reach_the_codec() {
        let config = parse(&["platefetch", "plate", "encode", "-1"]).unwrap();
        let Action::Plate(command) = config.action else {
            panic!("expected plate action");
        };
        let PlateCommand::Encode { index } = command else {
            panic!("expected encode");
        };
        assert_eq!(index, "-1");
        assert!(matches!(
            crate::cli::service::plate::encode(&index),
            Err(crate::cli::error::ServiceError::Plate(
                platefetch::PlateError::Malformed { .. }
            ))
        ));

        let config = parse(&["platefetch", "plate", "range", "-5", "3"]).unwrap();
        assert!(matches!(
            config.action,
            Action::Plate(PlateCommand::Range { ref start, count: 3 }) if start == "-5"
        ));
    }
}
