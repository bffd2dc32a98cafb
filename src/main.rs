mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction, ModeAction, ScheduleAction};
use std::process;
use tracing_subscriber::EnvFilter;

use fitdash::output;

fn init_logging() {
    let filter = EnvFilter::try_from_env("FITDASH_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Mode { .. } => "mode",
        Commands::Log { .. } => "log",
        Commands::Schedule { .. } => "schedule",
        Commands::Notifications { .. } => "notifications",
        Commands::Status => "status",
        Commands::Info { .. } => "info",
        Commands::Reset { .. } => "reset",
        Commands::Config { .. } => "config",
        Commands::Completions { .. } => "completions",
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let name = command_name(&cli.command);

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Mode { action } => match action {
            ModeAction::Show => cmd::mode::run_show(cli.human),
            ModeAction::Set { mode } => cmd::mode::run_set(&mode, cli.date, cli.human),
        },
        Commands::Log {
            title,
            activity_type,
            time,
            duration,
        } => cmd::log::run(
            &title,
            &activity_type,
            &time,
            &duration,
            cli.date,
            cli.human,
        ),
        Commands::Schedule { action } => match action {
            ScheduleAction::List => cmd::schedule::run_list(cli.human),
            ScheduleAction::Rm { id } => cmd::schedule::run_remove(&id, cli.human),
        },
        Commands::Notifications { read, clear } => cmd::notifications::run(read, clear, cli.human),
        Commands::Status => cmd::status::run(cli.date, cli.human),
        Commands::Info {
            weight,
            height,
            age,
            sex,
            activity,
        } => cmd::info::run(
            weight,
            height,
            age,
            sex.as_deref(),
            activity.as_deref(),
            cli.human,
        ),
        Commands::Reset { yes } => cmd::reset::run(yes, cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "fitdash", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        let code = e
            .downcast_ref::<cmd::CommandError>()
            .map(cmd::CommandError::code)
            .unwrap_or("general_error");
        let err = output::error(name, code, &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
