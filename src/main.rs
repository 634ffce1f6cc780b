use car_streams::adapters::fleet::from_optional_path;
use car_streams::domain::ports::ConfigProvider;
use car_streams::utils::error::ErrorSeverity;
use car_streams::utils::logger;
use car_streams::{CliConfig, Showcase, StreamsError};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting car-streams");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Showcase failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 1: 設定或輸入問題, 2: 資料格式問題, 3: 系統 IO 錯誤
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), StreamsError> {
    let settings = config.resolve()?;
    let source = from_optional_path(settings.fleet_file());
    let report = Showcase::new(source, settings).run()?;

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render()?);
    }

    tracing::info!("✅ Showcase completed");
    Ok(())
}
