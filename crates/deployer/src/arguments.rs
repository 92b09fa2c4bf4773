use {
    alloy::{primitives::U256, signers::local::PrivateKeySigner},
    contracts::Deployment,
    shared_arguments::display_secret_option,
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

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Hex encoded private key of the deploying account. Without it the
    /// first account unlocked on the node deploys.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: Option<PrivateKeySigner>,

    /// Directory containing the compiled contract artifacts.
    #[clap(long, env, default_value = "artifacts/contracts")]
    pub artifacts_path: PathBuf,

    /// Name of the contract to deploy.
    #[clap(long, env, default_value = "CellarCoinNFT")]
    pub contract: String,

    /// Token collection name.
    #[clap(long, default_value = "Enotecum")]
    pub name: String,

    /// Token collection symbol.
    #[clap(long, default_value = "ENT")]
    pub symbol: String,

    /// Prefix of every token's metadata URI.
    #[clap(
        long,
        default_value = "https://gateway.pinata.cloud/ipfs/QmcuydTDSpqFUqz3SsgtJJEpoH8pBBjbiT1ySu6rTLTJto/"
    )]
    pub base_uri: String,

    /// Maximum number of tokens that can be minted.
    #[clap(long, default_value = "100000")]
    pub max_supply: U256,

    /// Number of confirmations to wait for before the deployment counts as
    /// done.
    #[clap(long, env, default_value = "1")]
    pub confirmations: u64,
}

impl Arguments {
    pub fn deployment(&self) -> Deployment {
        Deployment {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            base_uri: self.base_uri.clone(),
            max_supply: self.max_supply,
        }
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            shared,
            node_url,
            private_key,
            artifacts_path,
            contract,
            name,
            symbol,
            base_uri,
            max_supply,
            confirmations,
        } = self;

        write!(f, "{shared}")?;
        writeln!(f, "node_url: {node_url}")?;
        display_secret_option(f, "private_key", private_key)?;
        writeln!(f, "artifacts_path: {artifacts_path:?}")?;
        writeln!(f, "contract: {contract}")?;
        writeln!(f, "name: {name}")?;
        writeln!(f, "symbol: {symbol}")?;
        writeln!(f, "base_uri: {base_uri}")?;
        writeln!(f, "max_supply: {max_supply}")?;
        writeln!(f, "confirmations: {confirmations}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::Parser};

    // First default anvil/hardhat account.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn defaults_describe_enotecum_collection() {
        let args = Arguments::try_parse_from(["deployer"]).unwrap();

        assert_eq!(
            args.deployment(),
            Deployment {
                name: "Enotecum".to_string(),
                symbol: "ENT".to_string(),
                base_uri: "https://gateway.pinata.cloud/ipfs/\
                           QmcuydTDSpqFUqz3SsgtJJEpoH8pBBjbiT1ySu6rTLTJto/"
                    .to_string(),
                max_supply: U256::from(100_000),
            }
        );
        assert_eq!(args.contract, "CellarCoinNFT");
        assert_eq!(args.confirmations, 1);
    }

    #[test]
    fn parses_private_key_and_hides_it() {
        let args = Arguments::try_parse_from(["deployer", "--private-key", DEV_KEY]).unwrap();

        let signer = args.private_key.as_ref().unwrap();
        assert_eq!(
            signer.address().to_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
        let display = args.to_string();
        assert!(display.contains("private_key: SECRET"));
        assert!(!display.contains(&DEV_KEY[2..]));
    }

    #[test]
    fn rejects_invalid_private_key() {
        assert!(Arguments::try_parse_from(["deployer", "--private-key", "0x1234"]).is_err());
    }
}
