use chronicle_server::config::Config;
use chronicle_server::logging;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_format);

    chronicle_server::run(config).await
}
