//! Bindings and a thin client for the allow-list NFT contract.
//!
//! The contract itself is compiled elsewhere; only its interface is declared
//! here and the creation code is taken from its compilation artifact.

use {
    crate::artifact::Artifact,
    alloy::{
        network::TransactionBuilder as _,
        primitives::{Address, Bytes, TxHash, U256},
        providers::{DynProvider, Provider},
        rpc::types::{TransactionReceipt, TransactionRequest},
        sol_types::SolConstructor as _,
    },
    anyhow::{Context, Result},
    ethrpc::{CallBuilderExt as _, extensions::ensure_success},
    std::fmt::{self, Display, Formatter},
};

alloy::sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract EnotNFT {
        constructor(string name, string symbol, string baseURI, uint256 maxSupply);

        function name() external view returns (string);
        function symbol() external view returns (string);
        function owner() external view returns (address);
        function totalSupply() external view returns (uint256);

        function isSaleActive() external view returns (bool);
        function setSaleState(bool newState) external;

        function isAllowListActive() external view returns (bool);
        function setIsAllowListActive(bool newState) external;
        function addUser(address user) external;
        function addArrayOfUsers(address[] users) external;
        function verifyUser(address user) external view returns (bool);

        function baseTokenURI() external view returns (string);
        function setBaseURI(string baseURI) external;

        function price() external view returns (uint256);
        function setMintPrice(uint256 newPrice) external;

        function paused() external view returns (bool);
        function pause() external;
        function unpause() external;

        function mint(uint256 quantity) external payable;
    }
}

pub type Instance = EnotNFT::EnotNFTInstance<DynProvider>;

/// Solidity types of the constructor parameters, in order.
pub const CONSTRUCTOR_PARAMS: [&str; 4] = ["string", "string", "string", "uint256"];

/// Constructor arguments of a deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub max_supply: U256,
}

impl Deployment {
    pub fn constructor_args(&self) -> Vec<u8> {
        EnotNFT::constructorCall {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            baseURI: self.base_uri.clone(),
            maxSupply: self.max_supply,
        }
        .abi_encode()
    }

    /// The artifact's creation bytecode followed by the ABI encoded
    /// constructor arguments.
    pub fn creation_code(&self, artifact: &Artifact) -> Bytes {
        [artifact.bytecode.as_ref(), &self.constructor_args()]
            .concat()
            .into()
    }
}

impl Display for Deployment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            symbol,
            base_uri,
            max_supply,
        } = self;
        write!(
            f,
            "{name} ({symbol}), base URI {base_uri:?}, max supply {max_supply}"
        )
    }
}

/// Deploys a new contract from `artifact` and waits until the deployment
/// transaction has `confirmations` confirmations.
///
/// Deploying is not idempotent, so nothing here retries.
pub async fn deploy(
    provider: &DynProvider,
    from: Address,
    artifact: &Artifact,
    deployment: &Deployment,
    confirmations: u64,
) -> Result<Nft> {
    artifact
        .ensure_constructor(&CONSTRUCTOR_PARAMS)
        .context("artifact does not match the NFT constructor")?;

    let tx = TransactionRequest::default()
        .from(from)
        .with_deploy_code(deployment.creation_code(artifact));
    let pending = provider
        .send_transaction(tx)
        .await
        .context("failed to send deployment transaction")?;
    let hash = *pending.tx_hash();
    tracing::info!(?hash, %deployment, "deployment transaction sent");

    let receipt = pending
        .with_required_confirmations(confirmations)
        .get_receipt()
        .await
        .with_context(|| format!("failed to confirm deployment transaction {hash:?}"))?;
    let address = deployed_address(&receipt)?;
    tracing::debug!(?address, block = ?receipt.block_number, "contract deployed");

    Ok(Nft::at(address, provider.clone(), from))
}

fn deployed_address(receipt: &TransactionReceipt) -> Result<Address> {
    ensure_success(receipt).context("deployment failed")?;
    receipt.contract_address.with_context(|| {
        format!(
            "receipt of {:?} has no contract address",
            receipt.transaction_hash
        )
    })
}

/// A deployed NFT contract together with the account that sends
/// transactions to it.
#[derive(Clone, Debug)]
pub struct Nft {
    instance: Instance,
    from: Address,
}

impl Nft {
    pub fn at(address: Address, provider: DynProvider, from: Address) -> Self {
        Self {
            instance: Instance::new(address, provider),
            from,
        }
    }

    /// The same contract, but transactions are sent from `from`.
    pub fn connect(&self, from: Address) -> Self {
        Self {
            instance: self.instance.clone(),
            from,
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub fn sender(&self) -> Address {
        self.from
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub async fn name(&self) -> Result<String> {
        self.instance.name().call().await.context("name()")
    }

    pub async fn symbol(&self) -> Result<String> {
        self.instance.symbol().call().await.context("symbol()")
    }

    pub async fn owner(&self) -> Result<Address> {
        self.instance.owner().call().await.context("owner()")
    }

    pub async fn total_supply(&self) -> Result<U256> {
        self.instance
            .totalSupply()
            .call()
            .await
            .context("totalSupply()")
    }

    pub async fn is_sale_active(&self) -> Result<bool> {
        self.instance
            .isSaleActive()
            .call()
            .await
            .context("isSaleActive()")
    }

    pub async fn set_sale_state(&self, active: bool) -> Result<TxHash> {
        let receipt = self
            .instance
            .setSaleState(active)
            .from(self.from)
            .send_and_watch()
            .await
            .context("setSaleState()")?;
        Ok(receipt.transaction_hash)
    }

    pub async fn is_allow_list_active(&self) -> Result<bool> {
        self.instance
            .isAllowListActive()
            .call()
            .await
            .context("isAllowListActive()")
    }

    pub async fn set_allow_list_active(&self, active: bool) -> Result<TxHash> {
        let receipt = self
            .instance
            .setIsAllowListActive(active)
            .from(self.from)
            .send_and_watch()
            .await
            .context("setIsAllowListActive()")?;
        Ok(receipt.transaction_hash)
    }

    pub async fn add_user(&self, user: Address) -> Result<TxHash> {
        let receipt = self
            .instance
            .addUser(user)
            .from(self.from)
            .send_and_watch()
            .await
            .context("addUser()")?;
        Ok(receipt.transaction_hash)
    }

    pub async fn add_users(&self, users: Vec<Address>) -> Result<TxHash> {
        let receipt = self
            .instance
            .addArrayOfUsers(users)
            .from(self.from)
            .send_and_watch()
            .await
            .context("addArrayOfUsers()")?;
        Ok(receipt.transaction_hash)
    }

    pub async fn verify_user(&self, user: Address) -> Result<bool> {
        self.instance
            .verifyUser(user)
            .call()
            .await
            .context("verifyUser()")
    }

    pub async fn base_token_uri(&self) -> Result<String> {
        self.instance
            .baseTokenURI()
            .call()
            .await
            .context("baseTokenURI()")
    }

    pub async fn set_base_uri(&self, base_uri: String) -> Result<TxHash> {
        let receipt = self
            .instance
            .setBaseURI(base_uri)
            .from(self.from)
            .send_and_watch()
            .await
            .context("setBaseURI()")?;
        Ok(receipt.transaction_hash)
    }

    pub async fn price(&self) -> Result<U256> {
        self.instance.price().call().await.context("price()")
    }

    pub async fn set_mint_price(&self, price: U256) -> Result<TxHash> {
        let receipt = self
            .instance
            .setMintPrice(price)
            .from(self.from)
            .send_and_watch()
            .await
            .context("setMintPrice()")?;
        Ok(receipt.transaction_hash)
    }

    pub async fn paused(&self) -> Result<bool> {
        self.instance.paused().call().await.context("paused()")
    }

    pub async fn pause(&self) -> Result<TxHash> {
        let receipt = self
            .instance
            .pause()
            .from(self.from)
            .send_and_watch()
            .await
            .context("pause()")?;
        Ok(receipt.transaction_hash)
    }

    pub async fn unpause(&self) -> Result<TxHash> {
        let receipt = self
            .instance
            .unpause()
            .from(self.from)
            .send_and_watch()
            .await
            .context("unpause()")?;
        Ok(receipt.transaction_hash)
    }

    /// Mints `quantity` tokens to the sender, paying `value` wei.
    pub async fn mint(&self, quantity: U256, value: U256) -> Result<TxHash> {
        let receipt = self
            .instance
            .mint(quantity)
            .from(self.from)
            .value(value)
            .send_and_watch()
            .await
            .context("mint()")?;
        Ok(receipt.transaction_hash)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::{
            primitives::{B256, keccak256},
            sol_types::{SolCall, SolValue},
        },
        hex_literal::hex,
        serde_json::json,
    };

    fn deployment_receipt(status: bool, contract_address: Option<Address>) -> TransactionReceipt {
        serde_json::from_value(json!({
            "type": "0x2",
            "status": if status { "0x1" } else { "0x0" },
            "cumulativeGasUsed": "0x2dc6c0",
            "logs": [],
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": B256::repeat_byte(0xaa),
            "transactionIndex": "0x0",
            "blockHash": B256::repeat_byte(0xbb),
            "blockNumber": "0x1",
            "gasUsed": "0x2dc6c0",
            "effectiveGasPrice": "0x3b9aca00",
            "from": Address::repeat_byte(0x02),
            "to": null,
            "contractAddress": contract_address,
        }))
        .unwrap()
    }

    #[test]
    fn deployed_address_comes_from_receipt() {
        let address = Address::repeat_byte(0x01);

        let deployed = deployed_address(&deployment_receipt(true, Some(address))).unwrap();

        assert_eq!(deployed, address);
    }

    #[test]
    fn reverted_deployment_names_the_transaction() {
        let receipt = deployment_receipt(false, Some(Address::repeat_byte(0x01)));

        let err = format!("{:?}", deployed_address(&receipt).unwrap_err());

        assert!(err.contains("reverted"), "{err}");
        assert!(err.contains(&format!("{:?}", B256::repeat_byte(0xaa))), "{err}");
    }

    #[test]
    fn deployment_without_contract_address_fails() {
        let receipt = deployment_receipt(true, None);

        let err = format!("{:?}", deployed_address(&receipt).unwrap_err());

        assert!(err.contains("no contract address"), "{err}");
        assert!(err.contains(&format!("{:?}", B256::repeat_byte(0xaa))), "{err}");
    }

    fn deployment() -> Deployment {
        Deployment {
            name: "Enoc".to_string(),
            symbol: "Enoc".to_string(),
            base_uri: "www.mytoken/".to_string(),
            max_supply: U256::from(100_000),
        }
    }

    fn nft() -> (Nft, alloy::providers::mock::Asserter) {
        let (provider, asserter) = ethrpc::mocked_provider();
        let nft = Nft::at(
            Address::repeat_byte(0x01),
            provider,
            Address::repeat_byte(0x02),
        );
        (nft, asserter)
    }

    #[test]
    fn creation_code_appends_constructor_args() {
        let artifact = Artifact {
            name: None,
            abi: Default::default(),
            bytecode: Bytes::from_static(&hex!("6080604052")),
        };

        let code = deployment().creation_code(&artifact);

        assert_eq!(&code[..5], &hex!("6080604052"));
        let (name, symbol, base_uri, max_supply) =
            <(String, String, String, U256)>::abi_decode_params(&code[5..]).unwrap();
        assert_eq!(name, "Enoc");
        assert_eq!(symbol, "Enoc");
        assert_eq!(base_uri, "www.mytoken/");
        assert_eq!(max_supply, U256::from(100_000));
    }

    #[test]
    fn selectors_match_contract_signatures() {
        for (selector, signature) in [
            (EnotNFT::setSaleStateCall::SELECTOR, "setSaleState(bool)"),
            (
                EnotNFT::setIsAllowListActiveCall::SELECTOR,
                "setIsAllowListActive(bool)",
            ),
            (
                EnotNFT::addArrayOfUsersCall::SELECTOR,
                "addArrayOfUsers(address[])",
            ),
            (EnotNFT::verifyUserCall::SELECTOR, "verifyUser(address)"),
            (EnotNFT::setBaseURICall::SELECTOR, "setBaseURI(string)"),
            (EnotNFT::setMintPriceCall::SELECTOR, "setMintPrice(uint256)"),
            (EnotNFT::mintCall::SELECTOR, "mint(uint256)"),
        ] {
            assert_eq!(selector, keccak256(signature)[..4], "{signature}");
        }
    }

    #[tokio::test]
    async fn reads_contract_state() {
        let (nft, asserter) = nft();
        let owner = Address::repeat_byte(0x02);

        asserter.push_success(&Bytes::from(
            EnotNFT::ownerCall::abi_encode_returns(&owner),
        ));
        asserter.push_success(&Bytes::from(
            EnotNFT::isSaleActiveCall::abi_encode_returns(&true),
        ));
        asserter.push_success(&Bytes::from(
            EnotNFT::baseTokenURICall::abi_encode_returns(&"www.metadata/".to_string()),
        ));
        asserter.push_success(&Bytes::from(
            EnotNFT::priceCall::abi_encode_returns(&U256::from(10)),
        ));
        asserter.push_success(&Bytes::from(
            EnotNFT::verifyUserCall::abi_encode_returns(&false),
        ));

        assert_eq!(nft.owner().await.unwrap(), owner);
        assert!(nft.is_sale_active().await.unwrap());
        assert_eq!(nft.base_token_uri().await.unwrap(), "www.metadata/");
        assert_eq!(nft.price().await.unwrap(), U256::from(10));
        assert!(!nft.verify_user(Address::repeat_byte(0x03)).await.unwrap());
    }

    #[tokio::test]
    async fn read_errors_name_the_call() {
        let (nft, asserter) = nft();
        asserter.push_failure_msg("execution reverted");

        let err = nft.paused().await.unwrap_err();

        assert!(format!("{err:?}").contains("paused()"));
        assert!(format!("{err:?}").contains("execution reverted"));
    }

    #[test]
    fn connect_switches_sender_only() {
        let (nft, _) = nft();
        let other = nft.connect(Address::repeat_byte(0x05));

        assert_eq!(other.address(), nft.address());
        assert_eq!(other.sender(), Address::repeat_byte(0x05));
    }

    #[test]
    fn deployment_display() {
        assert_eq!(
            deployment().to_string(),
            "Enoc (Enoc), base URI \"www.mytoken/\", max supply 100000"
        );
    }
}
