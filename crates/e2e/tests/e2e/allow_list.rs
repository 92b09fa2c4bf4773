use e2e::setup::*;

#[tokio::test]
#[ignore]
async fn local_node_allow_list_state() {
    run_test(allow_list_state).await;
}

async fn allow_list_state(onchain: Onchain) {
    onchain.nft.set_allow_list_active(true).await.unwrap();
    assert!(onchain.nft.is_allow_list_active().await.unwrap());
}

#[tokio::test]
#[ignore]
async fn local_node_add_user() {
    run_test(add_user).await;
}

async fn add_user(onchain: Onchain) {
    let [user, stranger] = onchain.users();

    onchain.nft.add_user(user).await.unwrap();

    assert!(onchain.nft.verify_user(user).await.unwrap());
    assert!(!onchain.nft.verify_user(stranger).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn local_node_add_array_of_users() {
    run_test(add_array_of_users).await;
}

async fn add_array_of_users(onchain: Onchain) {
    let users: [_; 5] = onchain.users();

    onchain.nft.add_users(users.to_vec()).await.unwrap();

    for user in users {
        assert!(onchain.nft.verify_user(user).await.unwrap(), "{user}");
    }
}
