pub mod init;
pub mod reminder;
pub mod today;
pub mod token;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show today's worked time and expected clock-out")]
    Today(today::TodayArgs),
    #[command(about = "Keep refreshing attendance and fire reminders")]
    Watch(watch::WatchArgs),
    #[command(about = "Manage the stored Keka token", arg_required_else_help = true)]
    Token(token::TokenArgs),
    #[command(about = "Manage clock-out reminders", arg_required_else_help = true)]
    Reminder(reminder::ReminderArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Today(args) => today::cmd(args).await,
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Token(args) => token::cmd(args),
            Commands::Reminder(args) => reminder::cmd(args),
        }
    }
}
