use clap::Parser;
use small_utils::utils::{logger, validation::Validate};
use small_utils::{app, CliConfig, Settings, UtilsError};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 載入設定檔
    let settings = match load_settings(config.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    let level = settings.logging.level.as_deref();
    if settings.logging.json {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
        tracing::debug!("Settings: {:?}", settings);
    }

    let result = app::run(&config.command, &settings)
        .await
        .map(|output| output.render(config.json));

    match result {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn load_settings(path: Option<&str>) -> Result<Settings, UtilsError> {
    let settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.validate()?;
    Ok(settings)
}
