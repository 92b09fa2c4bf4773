use {alloy::primitives::U256, e2e::setup::*};

#[tokio::test]
#[ignore]
async fn local_node_owner_is_deployer() {
    run_test(owner_is_deployer).await;
}

async fn owner_is_deployer(onchain: Onchain) {
    assert_eq!(onchain.nft.owner().await.unwrap(), onchain.deployer());
}

#[tokio::test]
#[ignore]
async fn local_node_deployment_metadata() {
    run_test(deployment_metadata).await;
}

async fn deployment_metadata(onchain: Onchain) {
    let deployment = test_deployment();
    assert_eq!(onchain.nft.name().await.unwrap(), deployment.name);
    assert_eq!(onchain.nft.symbol().await.unwrap(), deployment.symbol);
    assert_eq!(onchain.nft.total_supply().await.unwrap(), U256::ZERO);
}

#[tokio::test]
#[ignore]
async fn local_node_sale_state() {
    run_test(sale_state).await;
}

async fn sale_state(onchain: Onchain) {
    onchain.nft.set_sale_state(true).await.unwrap();
    assert!(onchain.nft.is_sale_active().await.unwrap());
}

#[tokio::test]
#[ignore]
async fn local_node_base_uri() {
    run_test(base_uri).await;
}

async fn base_uri(onchain: Onchain) {
    onchain
        .nft
        .set_base_uri("www.metadata/".to_string())
        .await
        .unwrap();
    assert_eq!(onchain.nft.base_token_uri().await.unwrap(), "www.metadata/");
}

#[tokio::test]
#[ignore]
async fn local_node_pause() {
    run_test(pause).await;
}

async fn pause(onchain: Onchain) {
    onchain.nft.pause().await.unwrap();
    assert!(onchain.nft.paused().await.unwrap());
}

#[tokio::test]
#[ignore]
async fn local_node_unpause() {
    run_test(unpause).await;
}

async fn unpause(onchain: Onchain) {
    onchain.nft.pause().await.unwrap();
    onchain.nft.unpause().await.unwrap();
    assert!(!onchain.nft.paused().await.unwrap());
}

#[tokio::test]
#[ignore]
async fn local_node_mint_price() {
    run_test(mint_price).await;
}

async fn mint_price(onchain: Onchain) {
    onchain.nft.set_mint_price(U256::from(10)).await.unwrap();
    assert_eq!(onchain.nft.price().await.unwrap(), U256::from(10));
}
