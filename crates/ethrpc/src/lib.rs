pub mod account;
pub mod extensions;

pub use {account::Account, extensions::CallBuilderExt};
use {
    alloy::{
        network::EthereumWallet,
        providers::{DynProvider, Provider, ProviderBuilder},
        signers::local::PrivateKeySigner,
    },
    anyhow::Result,
    url::Url,
};

pub type AlloyProvider = DynProvider;

/// Creates a provider that relies on the node to sign transactions. This is
/// what local development nodes (anvil, hardhat) expect for their unlocked
/// accounts.
pub fn provider(url: &Url) -> AlloyProvider {
    ProviderBuilder::new().connect_http(url.clone()).erased()
}

/// Creates a provider that signs every transaction locally with `signer`.
pub fn provider_with_signer(url: &Url, signer: PrivateKeySigner) -> AlloyProvider {
    ProviderBuilder::new()
        .wallet(EthereumWallet::new(signer))
        .connect_http(url.clone())
        .erased()
}

/// Connects to the node at `url` and picks the account that will send
/// transactions: the local signer if a private key was configured, otherwise
/// the first account the node has unlocked.
pub async fn connect(
    url: &Url,
    private_key: Option<PrivateKeySigner>,
) -> Result<(AlloyProvider, Account)> {
    match private_key {
        Some(signer) => {
            let account = Account::Local(signer.address());
            Ok((provider_with_signer(url, signer), account))
        }
        None => {
            let provider = provider(url);
            let account = Account::unlocked(&provider).await?;
            Ok((provider, account))
        }
    }
}

#[cfg(any(test, feature = "test-util"))]
pub fn mocked_provider() -> (AlloyProvider, alloy::providers::mock::Asserter) {
    let asserter = alloy::providers::mock::Asserter::new();
    let provider = ProviderBuilder::new()
        .connect_mocked_client(asserter.clone())
        .erased();
    (provider, asserter)
}
