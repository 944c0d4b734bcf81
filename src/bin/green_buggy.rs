use blue_green_demo::app;
use blue_green_demo::config::Config;
use blue_green_demo::deployment::Deployment;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("blue-green-demo starting (green, buggy)");

    let config = Config::from_env()?;
    config.log_startup();

    app::serve(config, Deployment::GREEN_BUGGY).await
}
