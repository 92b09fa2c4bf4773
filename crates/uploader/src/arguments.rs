use {
    shared_arguments::{display_option, display_secret_option},
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
    },
    url::Url,
};

#[derive(clap::Parser, Debug)]
pub struct Arguments {
    #[clap(flatten)]
    pub shared: shared_arguments::Arguments,

    #[clap(flatten)]
    pub http_client: http_client::Arguments,

    /// Pinata API key. A missing key is reported when the API is called.
    #[clap(long, env = "Pinata_API_Key", hide_env_values = true)]
    pub pinata_api_key: Option<String>,

    /// Pinata API secret belonging to the key.
    #[clap(long, env = "Pinata_API_Secret", hide_env_values = true)]
    pub pinata_api_secret: Option<String>,

    /// Base URL of the Pinata API.
    #[clap(long, env, default_value = pinata::DEFAULT_URL)]
    pub pinata_url: Url,

    /// File or directory to pin. Directories are pinned recursively.
    #[clap(long, env, default_value = "./metadata")]
    pub source_path: PathBuf,

    /// Name of the pin, defaults to the base name of the source path.
    #[clap(long, env)]
    pub pin_name: Option<String>,

    /// CID version of the pinned content.
    #[clap(long, env, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub cid_version: Option<u8>,

    /// Wrap the pinned content in a directory.
    #[clap(long, env)]
    pub wrap_with_directory: Option<bool>,
}

impl Arguments {
    pub fn credentials(&self) -> pinata::Credentials {
        pinata::Credentials {
            api_key: self.pinata_api_key.clone(),
            api_secret: self.pinata_api_secret.clone(),
        }
    }

    pub fn pin_options(&self) -> pinata::PinOptions {
        pinata::PinOptions {
            name: self.pin_name.clone(),
            cid_version: self.cid_version,
            wrap_with_directory: self.wrap_with_directory,
            ..Default::default()
        }
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            shared,
            http_client,
            pinata_api_key,
            pinata_api_secret,
            pinata_url,
            source_path,
            pin_name,
            cid_version,
            wrap_with_directory,
        } = self;

        write!(f, "{shared}")?;
        write!(f, "{http_client}")?;
        display_secret_option(f, "pinata_api_key", pinata_api_key)?;
        display_secret_option(f, "pinata_api_secret", pinata_api_secret)?;
        writeln!(f, "pinata_url: {pinata_url}")?;
        writeln!(f, "source_path: {source_path:?}")?;
        display_option(f, "pin_name", pin_name)?;
        display_option(f, "cid_version", cid_version)?;
        display_option(f, "wrap_with_directory", wrap_with_directory)?;
        Ok(())
    }
}
