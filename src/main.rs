use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use easytv::app::Application;
use easytv::cli::{Cli, Commands, ConfigActions};
use easytv_core::{init_logging, AppConfig, LogFormat};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 加载配置
    let config = match &cli.command {
        Commands::Config(command) if matches!(command.action, ConfigActions::Example) => {
            print!("{}", AppConfig::default().to_toml()?);
            return Ok(ExitCode::SUCCESS);
        }
        _ => AppConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
            Some(path) => format!("加载配置文件失败: {path}"),
            None => "加载配置失败".to_string(),
        })?,
    };

    // 初始化日志系统
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.observability.log_level);
    let log_format: LogFormat = cli
        .log_format
        .as_deref()
        .unwrap_or(&config.observability.log_format)
        .parse()?;
    init_logging(log_level, log_format)?;

    info!("启动 EasyTV 控制台");
    debug!("API: {}", config.api.base_url);

    if let Commands::Config(config_command) = &cli.command {
        match config_command.action {
            ConfigActions::Show => print!("{}", config.to_toml()?),
            ConfigActions::Validate => println!("配置有效"),
            ConfigActions::Example => {}
        }
        return Ok(ExitCode::SUCCESS);
    }

    let app = Application::new(&config, cli.yes)?;
    let succeeded = app.run(cli.command).await?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
