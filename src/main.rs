mod config;
mod create;
mod git;
mod prompt;

use std::fs;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(version)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(arg_required_else_help = true)]
#[command(about = "Scaffolding generator for mini-program pages and components")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(
        short = 'h',
        long = "help",
        help = "Print this help message.",
        action = ArgAction::Help,
    )]
    help: Option<bool>,

    #[arg(
        short = 'V',
        long = "version",
        help = "Print version information.",
        action = ArgAction::Version,
    )]
    version: Option<bool>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Create a new page or component in the current project.")]
    Create,
}

pub(crate) struct App {
    cli: Cli,
    config: Config,
}

impl App {
    fn init() -> Self {
        let cli = Cli::parse();
        let config = Config::init().expect("failed to initialize config");
        fs::create_dir_all(&config.scratch).expect("failed to create scratch directory");
        Self { cli, config }
    }
}

fn main() -> Result<()> {
    let app = App::init();
    match app.cli.command {
        Command::Create => app.create(),
    }
}
