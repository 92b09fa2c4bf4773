use {
    alloy::{primitives::Address, providers::Provider},
    anyhow::{Context, Result},
    std::fmt::{self, Display, Formatter},
};

/// The account that authorizes transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Account {
    /// Transactions are signed locally with a configured private key.
    Local(Address),
    /// Transactions are signed by the node, which holds the key.
    Unlocked(Address),
}

impl Account {
    /// Picks the first account the node has unlocked.
    pub async fn unlocked(provider: &impl Provider) -> Result<Self> {
        let accounts = unlocked_accounts(provider).await?;
        let address = accounts
            .first()
            .copied()
            .context("node did not report any unlocked accounts")?;
        Ok(Self::Unlocked(address))
    }

    pub fn address(&self) -> Address {
        match self {
            Self::Local(address) | Self::Unlocked(address) => *address,
        }
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(address) => write!(f, "{address} (local signer)"),
            Self::Unlocked(address) => write!(f, "{address} (unlocked on node)"),
        }
    }
}

/// All accounts the node can sign for, in the order the node reports them.
pub async fn unlocked_accounts(provider: &impl Provider) -> Result<Vec<Address>> {
    provider
        .get_accounts()
        .await
        .context("could not fetch accounts from node")
}
