use clap::Parser;

use akbank_transfer::config::{AppConfig, ServiceConfig};
use akbank_transfer::service::TransferService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Initialize environment
    dotenv::dotenv().ok();
    let app_config = AppConfig::parse();

    let mut config = ServiceConfig::new(app_config.akbank_username, app_config.akbank_password);
    config.endpoint = app_config.akbank_endpoint;

    let mut service = TransferService::new(config)?;
    let result = service
        .get_transaction_status(
            &app_config.txn_id,
            app_config.txn_date.map(Into::into),
        )
        .await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
