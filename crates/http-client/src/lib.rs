use {
    reqwest::{Client, ClientBuilder},
    std::{
        fmt::{self, Display, Formatter},
        time::Duration,
    },
};

const USER_AGENT: &str = concat!("enotecum-nft/", env!("CARGO_PKG_VERSION"));

/// Time allowed to establish a connection. Transfers are not bounded unless a
/// request timeout is configured.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// An HTTP client factory.
///
/// All HTTP clients share the timeouts and user agent configured here.
#[derive(Clone, Debug, Default)]
pub struct HttpClientFactory {
    timeout: Option<Duration>,
}

impl HttpClientFactory {
    pub fn new(args: &Arguments) -> Self {
        Self {
            timeout: args.http_timeout,
        }
    }

    /// Creates a new HTTP client with the default settings.
    pub fn create(&self) -> reqwest::Result<Client> {
        self.builder().build()
    }

    /// Returns a `ClientBuilder` with the default settings.
    pub fn builder(&self) -> ClientBuilder {
        let builder = ClientBuilder::new()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(USER_AGENT);
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Command line arguments for the common HTTP factory.
#[derive(clap::Parser, Debug)]
#[group(skip)]
pub struct Arguments {
    /// Timeout for whole http requests, including the transfer of the body.
    /// Requests are not limited when unset.
    #[clap(long, env, value_parser = humantime::parse_duration)]
    pub http_timeout: Option<Duration>,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self { http_timeout } = self;

        match http_timeout {
            Some(timeout) => writeln!(f, "http_timeout: {timeout:?}"),
            None => writeln!(f, "http_timeout: None"),
        }
    }
}
