use clap::Parser;
use contact_intake::adapters::resend::ResendMailer;
use contact_intake::config::file::FileConfig;
use contact_intake::config::CliConfig;
use contact_intake::core::intake::IntakeService;
use contact_intake::domain::ports::ConfigProvider;
use contact_intake::server::{build_router, AppState};
use contact_intake::utils::{logger, validation::Validate};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting contact-intake server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 設定檔優先；否則使用命令列旗標
    if let Some(path) = cli.config.clone() {
        let config = FileConfig::from_file(&path)?;
        let bind = config.bind().to_string();
        let endpoint = config.provider_endpoint().to_string();
        run(bind, endpoint, config).await
    } else {
        let bind = cli.bind.clone();
        let endpoint = cli.provider_endpoint.clone();
        run(bind, endpoint, cli).await
    }
}

async fn run<C>(bind: String, provider_endpoint: String, config: C) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate + 'static,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mailer = ResendMailer::new(provider_endpoint);
    let state = AppState::new(IntakeService::new(mailer, config));
    let app = build_router(state);

    let listener = TcpListener::bind(&bind).await?;
    tracing::info!("✅ Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
