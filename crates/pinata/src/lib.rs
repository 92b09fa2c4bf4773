//! Pinata HTTP API client.
//!
//! <https://docs.pinata.cloud/api-reference>

pub mod source;

use {
    chrono::{DateTime, Utc},
    reqwest::{
        Client,
        RequestBuilder,
        StatusCode,
        multipart::{Form, Part},
    },
    serde::{Deserialize, Serialize, de::DeserializeOwned},
    std::{
        collections::BTreeMap,
        fmt::{self, Debug, Display, Formatter},
        path::{Path, PathBuf},
    },
    url::Url,
};

pub const DEFAULT_URL: &str = "https://api.pinata.cloud/";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no Pinata API key and secret provided")]
    MissingCredentials,
    #[error("{0:?} contains no files")]
    EmptySource(PathBuf),
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    #[error("collecting files did not complete")]
    Collect(#[from] tokio::task::JoinError),
    #[error("HTTP {status} error: {body}")]
    Http { status: StatusCode, body: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// API key pair. Either half may be missing, in which case every request
/// fails with [`Error::MissingCredentials`] before anything is sent.
#[derive(Clone, Default)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "SECRET"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "SECRET"))
            .finish()
    }
}

pub struct PinataClient {
    client: Client,
    base: Url,
    credentials: Credentials,
}

impl PinataClient {
    pub fn new(client: Client, base: Url, credentials: Credentials) -> Self {
        Self {
            client,
            base,
            credentials,
        }
    }

    /// Checks that the configured key pair is accepted.
    pub async fn test_authentication(&self) -> Result<Authentication> {
        let request = self.authorized(self.client.get(self.base.join("data/testAuthentication")?))?;
        send(request).await
    }

    /// Pins a file or a whole directory (recursively) to IPFS.
    pub async fn pin_from_fs(&self, path: &Path, options: &PinOptions) -> Result<PinResponse> {
        let request =
            self.authorized(self.client.post(self.base.join("pinning/pinFileToIPFS")?))?;

        let source = {
            let path = path.to_owned();
            tokio::task::spawn_blocking(move || source::collect(&path)).await??
        };
        let mut form = Form::new().percent_encode_noop();
        for file in &source.files {
            let contents = tokio::fs::read(&file.path)
                .await
                .map_err(|source| Error::Io {
                    path: file.path.clone(),
                    source,
                })?;
            form = form.part("file", Part::bytes(contents).file_name(file.name.clone()));
        }

        let metadata = PinataMetadata {
            name: options.name.as_deref().unwrap_or(&source.name),
            keyvalues: &options.key_values,
        };
        form = form.text("pinataMetadata", serde_json::to_string(&metadata)?);
        let pinata_options = PinataOptions {
            cid_version: options.cid_version,
            wrap_with_directory: options.wrap_with_directory,
        };
        if !pinata_options.is_empty() {
            form = form.text("pinataOptions", serde_json::to_string(&pinata_options)?);
        }

        tracing::debug!(?path, files = source.files.len(), "pinning files");
        send(request.multipart(form)).await
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let (Some(key), Some(secret)) = (&self.credentials.api_key, &self.credentials.api_secret)
        else {
            return Err(Error::MissingCredentials);
        };
        Ok(request
            .header("pinata_api_key", key)
            .header("pinata_secret_api_key", secret))
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Http { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}

#[derive(Clone, Debug, Default)]
pub struct PinOptions {
    /// Name shown in the Pinata dashboard. Defaults to the base name of the
    /// pinned path.
    pub name: Option<String>,
    pub key_values: BTreeMap<String, String>,
    /// 0 or 1.
    pub cid_version: Option<u8>,
    pub wrap_with_directory: Option<bool>,
}

#[derive(Serialize)]
struct PinataMetadata<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    keyvalues: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PinataOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    cid_version: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wrap_with_directory: Option<bool>,
}

impl PinataOptions {
    fn is_empty(&self) -> bool {
        self.cid_version.is_none() && self.wrap_with_directory.is_none()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Authentication {
    pub message: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PinResponse {
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
    #[serde(rename = "PinSize")]
    pub pin_size: u64,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "isDuplicate", default)]
    pub is_duplicate: bool,
}

impl Display for PinResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bytes, pinned at {})",
            self.ipfs_hash, self.pin_size, self.timestamp
        )?;
        if self.is_duplicate {
            f.write_str(", duplicate")?;
        }
        Ok(())
    }
}
