mod cli;
mod commands;
mod output;

use buddylock_core::LockError;
use clap::Parser;
use cli::{Cli, Commands};
use commands::Target;

/// Exit status when the lock stayed busy for the whole timeout (EX_TEMPFAIL)
const EXIT_LOCK_TIMEOUT: i32 = 75;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let lock_dir = commands::lock_dir(cli.lock_dir);

    let result = match cli.command {
        Commands::Path { name } => commands::path::run(&lock_dir, &name),
        Commands::Status { name, json } => commands::status::run(&lock_dir, &name, json),
        Commands::Run { name, exec } => commands::run::run(&lock_dir, Target::Named(name), exec),
        Commands::Project { slug, exec } => {
            commands::run::run(&lock_dir, Target::Project(slug), exec)
        }
        Commands::Slug { base, exec } => commands::run::run(&lock_dir, Target::Slug(base), exec),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let timed_out = e
                .downcast_ref::<LockError>()
                .is_some_and(LockError::is_timeout);
            std::process::exit(if timed_out { EXIT_LOCK_TIMEOUT } else { 1 });
        }
    }
}
