//! Extension methods for alloy contract calls.

use {
    alloy::{
        contract::{CallBuilder, CallDecoder},
        providers::Provider,
        rpc::types::TransactionReceipt,
    },
    anyhow::{Context, Result, ensure},
};

pub trait CallBuilderExt {
    /// Sends the transaction, waits for it to be mined and checks that it did
    /// not revert.
    ///
    /// Transactions that would revert usually already fail at gas estimation,
    /// in which case the returned error carries the node's revert reason.
    fn send_and_watch(self) -> impl Future<Output = Result<TransactionReceipt>>;
}

impl<P, D> CallBuilderExt for CallBuilder<P, D>
where
    P: Provider,
    D: CallDecoder,
{
    async fn send_and_watch(self) -> Result<TransactionReceipt> {
        let pending = self.send().await.context("failed to send transaction")?;
        let hash = *pending.tx_hash();
        tracing::debug!(?hash, "transaction sent");
        let receipt = pending
            .get_receipt()
            .await
            .with_context(|| format!("failed to get receipt for transaction {hash:?}"))?;
        ensure_success(&receipt)?;
        Ok(receipt)
    }
}

/// Fails with the transaction hash if the transaction reverted.
pub fn ensure_success(receipt: &TransactionReceipt) -> Result<()> {
    ensure!(
        receipt.status(),
        "transaction {:?} reverted",
        receipt.transaction_hash
    );
    Ok(())
}
