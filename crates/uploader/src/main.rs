use clap::Parser;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = uploader::arguments::Arguments::parse();
    observe::tracing::initialize(&args.shared.observe_config());
    tracing::info!("running uploader with validated arguments:\n{}", args);
    uploader::main(args).await;
}
