use clap::Parser;
use service_entrypoint::domain::ports::ProcessEnv;
use service_entrypoint::utils::logger;
use service_entrypoint::{Bootstrapper, CliConfig, EnvSnapshot, LaunchPlan, SystemLauncher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::debug!("CLI config: {:?}", config);

    let profile = match config.load_profile() {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("❌ Launch profile rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 環境變數只在啟動時讀取一次
    let env = EnvSnapshot::capture(&profile.service, &ProcessEnv);
    let plan = LaunchPlan::resolve(&profile, &env);

    if config.dry_run {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let launcher = SystemLauncher::new(!config.no_exec);
    let engine = Bootstrapper::new(launcher);

    match engine.run(&plan).await {
        Ok(outcome) => {
            let code = outcome.exit_code();
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            tracing::error!("❌ Bootstrap failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
