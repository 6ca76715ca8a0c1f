use clap::Parser;
use ridestats::cli::{Args, is_config_mode};
use ridestats::error::AppError;
use ridestats::ui::colors;
use ridestats::{Config, app, logging};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.plain {
        colors::set_colors_enabled(false);
    }

    // Handle configuration operations before anything else
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if is_config_mode(&args) {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_data_dir) = args.set_data_dir {
            config.data_dir = new_data_dir;
        }

        if let Some(new_log_path) = args.set_log_file {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.validate()?;
        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // The guard must stay alive so buffered log lines are flushed on exit
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let data_dir = PathBuf::from(args.data_dir.unwrap_or(config.data_dir));

    app::run(&data_dir).await
}
