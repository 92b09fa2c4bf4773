//! Contains command line arguments and related helpers that are shared between
//! the binaries.

use {
    std::fmt::{Display, Formatter},
    tracing::Level,
};

#[derive(clap::Parser, Debug)]
#[group(skip)]
pub struct Arguments {
    /// Log filter directives, see
    /// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
    #[clap(long, env, default_value = "info")]
    pub log_filter: String,

    /// Events at this level or more severe are written to stderr instead of
    /// stdout.
    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: Level,

    /// Emit log events as JSON lines.
    #[clap(long, env)]
    pub use_json_logs: bool,
}

impl Arguments {
    pub fn observe_config(&self) -> observe::Config {
        observe::Config::new(
            &self.log_filter,
            self.log_stderr_threshold,
            self.use_json_logs,
        )
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            use_json_logs,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")
    }
}

pub fn display_secret_option<T>(
    f: &mut Formatter<'_>,
    name: &str,
    option: &Option<T>,
) -> std::fmt::Result {
    display_option(f, name, &option.as_ref().map(|_| "SECRET"))
}

pub fn display_option(
    f: &mut Formatter<'_>,
    name: &str,
    option: &Option<impl Display>,
) -> std::fmt::Result {
    write!(f, "{name}: ")?;
    match option {
        Some(display) => writeln!(f, "{display}"),
        None => writeln!(f, "None"),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::Parser};

    struct Secret(Option<&'static str>);

    impl Display for Secret {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            display_secret_option(f, "api_key", &self.0)
        }
    }

    #[test]
    fn secrets_are_never_displayed() {
        assert_eq!(Secret(Some("hunter2")).to_string(), "api_key: SECRET\n");
        assert_eq!(Secret(None).to_string(), "api_key: None\n");
    }

    #[test]
    fn parses_log_arguments() {
        let args = Arguments::try_parse_from([
            "test",
            "--log-filter",
            "warn,deployer=debug",
            "--log-stderr-threshold",
            "warn",
            "--use-json-logs",
        ])
        .unwrap();

        assert_eq!(args.log_filter, "warn,deployer=debug");
        assert_eq!(args.log_stderr_threshold, Level::WARN);
        assert!(args.use_json_logs);
        assert_eq!(
            args.to_string(),
            "log_filter: warn,deployer=debug\nlog_stderr_threshold: WARN\nuse_json_logs: true\n"
        );
    }
}
