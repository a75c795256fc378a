use clap::Parser;
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod parser;
mod views;

fn main() {
    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Preview(command) => commands::preview::preview_rule(command, &config),
        cli::Commands::Check(command) => commands::check::check_rule(command, &config),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();
    eprintln!("{} {}", "Error:".style(error_style), err);
}
