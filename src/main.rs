use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use monitoring_guide::domain::ports::Storage;
use monitoring_guide::utils::{logger, validation::Validate};
use monitoring_guide::{
    CliConfig, Commands, Guide, GuideError, LocalStorage, Query, Settings, TomlConfig,
};

fn main() {
    let config = CliConfig::parse();

    let file_config = match load_file_config(config.config.as_deref()) {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };
    let settings = Settings::resolve(&config, &file_config);

    // 初始化日誌
    logger::init_cli_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.json_logs,
    );
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = run(&config.command, &settings) {
        match e.downcast_ref::<GuideError>() {
            // 查無名稱視為用法錯誤，訊息原樣輸出
            Some(err) if err.is_not_found() => {
                CliConfig::command()
                    .error(ErrorKind::ValueValidation, err)
                    .exit();
            }
            _ => {
                tracing::error!("Command failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_file_config(path: Option<&str>) -> anyhow::Result<TomlConfig> {
    let Some(path) = path else {
        return Ok(TomlConfig::default());
    };

    let file_config = TomlConfig::from_file(path)
        .with_context(|| format!("Failed to load config file '{}'", path))?;
    file_config
        .validate()
        .with_context(|| format!("Invalid config file '{}'", path))?;
    Ok(file_config)
}

fn run(command: &Commands, settings: &Settings) -> anyhow::Result<()> {
    let guide = Guide::default()
        .with_locale(settings.locale)
        .with_format(settings.format);

    let document = guide.execute(&Query::from(command))?;

    match &settings.output {
        Some(path) => {
            LocalStorage::default()
                .write_file(path, format!("{}\n", document).as_bytes())
                .with_context(|| format!("Failed to write output to '{}'", path))?;
        }
        None => println!("{}", document),
    }

    Ok(())
}
