mod auth;
mod cli;
mod export;
mod generate;
mod publish;
mod serve;
mod telemetry;
mod tree_file;

use anyhow::Result;
use clap::Parser;
use cli::{AuthCommands, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { prompt, api_key, save } => {
            generate::run(&prompt, api_key.as_deref(), save.as_deref()).await
        }
        Commands::Export { files, out } => export::run(&files, &out),
        Commands::Publish { repo, token, files } => publish::run(&repo, token, &files).await,
        Commands::Serve { port } => serve::run(port).await,
        Commands::Auth { command } => match command {
            AuthCommands::SetKey { api_key } => auth::set_key(&api_key),
            AuthCommands::Clear => auth::clear(),
        },
    }
}
