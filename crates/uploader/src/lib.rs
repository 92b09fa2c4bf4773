pub mod arguments;

use {
    arguments::Arguments,
    http_client::HttpClientFactory,
    pinata::{Authentication, PinOptions, PinResponse, PinataClient},
    std::path::Path,
};

/// Outcome of both upload steps. Failures are logged, never propagated.
#[derive(Debug)]
pub struct Report {
    pub authentication: pinata::Result<Authentication>,
    pub pin: pinata::Result<PinResponse>,
}

pub async fn main(args: Arguments) {
    let pinata = match pinata_client(&args) {
        Ok(pinata) => pinata,
        Err(err) => {
            tracing::error!(?err, "failed to create HTTP client");
            return;
        }
    };
    run(&pinata, &args.source_path, &args.pin_options()).await;
}

pub fn pinata_client(args: &Arguments) -> reqwest::Result<PinataClient> {
    let client = HttpClientFactory::new(&args.http_client).create()?;
    Ok(PinataClient::new(
        client,
        args.pinata_url.clone(),
        args.credentials(),
    ))
}

/// Checks the credentials, then pins `source`.
///
/// The pin step runs regardless of the authentication outcome.
pub async fn run(pinata: &PinataClient, source: &Path, options: &PinOptions) -> Report {
    let authentication = pinata.test_authentication().await;
    match &authentication {
        Ok(result) => tracing::info!(?result, "authenticated with Pinata"),
        Err(err) => {
            tracing::error!(?err, "Pinata authentication failed");
            tracing::warn!("pinning anyway, the upload will likely be rejected");
        }
    }

    let pin = pinata.pin_from_fs(source, options).await;
    match &pin {
        Ok(pin) => tracing::info!(%pin, ?source, "pinned to IPFS"),
        Err(err) => tracing::error!(?err, ?source, "pinning failed"),
    }

    Report {
        authentication,
        pin,
    }
}
