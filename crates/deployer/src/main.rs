use clap::Parser;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize(&deployer::observe_config(&args));
    tracing::info!("running deployer with validated arguments:\n{}", args);
    match deployer::run(args).await {
        Ok(address) => println!("NFT deployed to: {address}"),
        Err(err) => {
            tracing::error!("deployment failed: {err:?}");
            std::process::exit(1);
        }
    }
}
