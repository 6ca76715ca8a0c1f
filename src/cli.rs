use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only manages configuration and should not
/// start an interactive exploration session.
pub fn is_config_mode(args: &Args) -> bool {
    args.list_config || args.set_data_dir.is_some() || args.set_log_file.is_some() || args.clear_log_file
}

/// US Bikeshare Statistics Explorer
///
/// An interactive explorer for US bikeshare trip data. Pick a city,
/// optionally narrow the data to one month or weekday, and read the ride
/// statistics: popular travel times, stations, trip durations, and rider
/// demographics.
///
/// City datasets are CSV files in the dataset directory; each file name
/// becomes a selectable city ("new_york_city.csv" offers "New York City").
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Directory to scan for city CSV datasets. Overrides the configured
    /// dataset directory for this run only.
    #[arg(short, long)]
    pub data_dir: Option<String>,

    /// Disable colored output.
    /// Useful for terminals that don't support ANSI colors or for plain text capture.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Path where log output is written for this run.
    #[arg(long, help_heading = "Logging")]
    pub log_file: Option<String>,

    /// Log to stdout in addition to the log file. Noisy inside the
    /// interactive prompts; mostly useful when scripted.
    #[arg(long, help_heading = "Logging")]
    pub debug: bool,

    /// Show the current configuration and exit.
    #[arg(long, help_heading = "Configuration")]
    pub list_config: bool,

    /// Persist a new dataset directory in the config file and exit.
    #[arg(long, help_heading = "Configuration")]
    pub set_data_dir: Option<String>,

    /// Persist a new log file path in the config file and exit.
    #[arg(long, help_heading = "Configuration")]
    pub set_log_file: Option<String>,

    /// Remove the persisted log file path and fall back to the default
    /// location. Exits after updating the config file.
    #[arg(long, help_heading = "Configuration")]
    pub clear_log_file: bool,
}
