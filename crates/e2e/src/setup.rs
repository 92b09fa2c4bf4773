use {
    crate::node::Node,
    alloy::primitives::{Address, U256},
    contracts::{Artifact, Deployment, Nft, nft},
    ethrpc::AlloyProvider,
    std::{future::Future, path::PathBuf},
};

/// Where the compiled contract is looked up when `NFT_ARTIFACT` is not set,
/// relative to the workspace root.
pub const DEFAULT_ARTIFACT: &str = "artifacts/contracts/EnotNFT.sol/EnotNFT.json";

/// The collection every test starts from.
pub fn test_deployment() -> Deployment {
    Deployment {
        name: "Enoc".to_string(),
        symbol: "Enoc".to_string(),
        base_uri: "www.mytoken/".to_string(),
        max_supply: U256::from(100_000),
    }
}

fn artifact_path() -> PathBuf {
    match std::env::var_os("NFT_ARTIFACT") {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(DEFAULT_ARTIFACT),
    }
}

/// A freshly deployed contract on its own node.
pub struct Onchain {
    pub provider: AlloyProvider,
    pub accounts: Vec<Address>,
    pub nft: Nft,
}

impl Onchain {
    /// The account that deployed the contract.
    pub fn deployer(&self) -> Address {
        self.accounts[0]
    }

    /// `N` unlocked accounts distinct from the deployer.
    pub fn users<const N: usize>(&self) -> [Address; N] {
        std::array::from_fn(|i| self.accounts[i + 1])
    }
}

/// *Testing* function that spawns a local node, deploys a fresh contract
/// from the first unlocked account and runs `f` against it. The node is
/// killed once `f` returns or panics.
///
/// This function also initializes tracing and sets the panic hook.
pub async fn run_test<F, Fut>(f: F)
where
    F: FnOnce(Onchain) -> Fut,
    Fut: Future<Output = ()>,
{
    let filters = ["warn", "e2e=debug", "contracts=debug", "ethrpc=debug"].join(",");
    observe::tracing::initialize_reentrant(&observe::Config::default().with_env_filter(&filters));

    let node = Node::new().await;
    let provider = ethrpc::provider(node.url());
    let accounts = ethrpc::account::unlocked_accounts(&provider).await.unwrap();

    let path = artifact_path();
    let artifact = Artifact::load(&path)
        .unwrap_or_else(|err| panic!("set NFT_ARTIFACT to a compiled EnotNFT: {err:?}"));
    let nft = nft::deploy(&provider, accounts[0], &artifact, &test_deployment(), 1)
        .await
        .unwrap();
    tracing::debug!(address = ?nft.address(), "deployed test contract");

    f(Onchain {
        provider,
        accounts,
        nft,
    })
    .await;

    drop(node);
}
