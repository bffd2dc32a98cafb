use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "fitdash", version, about = "Goal-mode fitness dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the config file
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Show or change the goal mode
    Mode {
        #[command(subcommand)]
        action: ModeAction,
    },

    /// Log a new activity
    Log {
        /// Activity name (e.g. "Evening Run")
        title: String,

        /// Fitness, Wellness, Nutrition or Other
        #[arg(long = "type", short = 't', default_value = "Fitness")]
        activity_type: String,

        /// Time of day (e.g. 18:30)
        #[arg(long, default_value = "")]
        time: String,

        /// Duration label (e.g. "45 min")
        #[arg(long, short = 'd', default_value = "")]
        duration: String,
    },

    /// Manage scheduled activities
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// List notifications
    Notifications {
        /// Mark all notifications as read
        #[arg(long)]
        read: bool,

        /// Delete all notifications
        #[arg(long, conflicts_with = "read")]
        clear: bool,
    },

    /// Dashboard overview
    Status,

    /// Energy formulas and mode rules, with an optional estimate
    Info {
        /// Body weight in kg
        #[arg(long, requires_all = ["height", "age"])]
        weight: Option<f64>,

        /// Height in cm
        #[arg(long, requires_all = ["weight", "age"])]
        height: Option<f64>,

        /// Age in years
        #[arg(long, requires_all = ["weight", "height"])]
        age: Option<u32>,

        /// male or female (default male)
        #[arg(long, requires = "weight")]
        sex: Option<String>,

        /// Report one TDEE: sedentary, light, moderate or active
        #[arg(long, requires = "weight")]
        activity: Option<String>,
    },

    /// Delete all stored state
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print a shell completion script
    Completions { shell: Shell },
}

#[derive(Subcommand)]
pub enum ModeAction {
    /// Show the current mode and lock status
    Show,
    /// Select a mode (weight-loss, weight-gain, muscle-gain, maintenance)
    Set { mode: String },
}

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// List scheduled activities
    List,
    /// Remove a scheduled activity by id
    Rm { id: String },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (name, email, avatar, storage.key)
        key: String,
        /// Config value
        value: String,
    },
}
