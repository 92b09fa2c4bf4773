pub mod arguments;

use {
    alloy::primitives::Address,
    anyhow::{Context, Result},
    arguments::Arguments,
    contracts::{Artifact, artifact, nft},
};

/// Logging configuration of the deployer. Every event goes to stderr so that
/// stdout only carries the deployed address.
pub fn observe_config(args: &Arguments) -> observe::Config {
    args.shared
        .observe_config()
        .with_stderr_threshold(tracing::Level::TRACE)
}

/// Deploys the configured contract once and returns its address.
pub async fn run(args: Arguments) -> Result<Address> {
    let path = artifact::find(&args.artifacts_path, &args.contract)?;
    let artifact = Artifact::load(&path)?;
    tracing::debug!(?path, "loaded contract artifact");

    let (provider, account) = ethrpc::connect(&args.node_url, args.private_key.clone())
        .await
        .with_context(|| format!("failed to connect to {}", args.node_url))?;
    tracing::info!(%account, contract = %args.contract, "deploying");

    let nft = nft::deploy(
        &provider,
        account.address(),
        &artifact,
        &args.deployment(),
        args.confirmations,
    )
    .await?;
    Ok(nft.address())
}
