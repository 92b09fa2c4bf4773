use {alloy::primitives::U256, e2e::setup::*};

#[tokio::test]
#[ignore]
async fn local_node_mint_from_allow_list() {
    run_test(mint_from_allow_list).await;
}

async fn mint_from_allow_list(onchain: Onchain) {
    let users: [_; 5] = onchain.users();
    onchain.nft.set_sale_state(true).await.unwrap();
    onchain.nft.set_allow_list_active(true).await.unwrap();
    onchain.nft.add_users(users.to_vec()).await.unwrap();

    // mint is payable and charges the price of every minted token.
    let quantity = U256::from(3);
    let price = onchain.nft.price().await.unwrap();
    onchain.nft.mint(quantity, quantity * price).await.unwrap();
}
