use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genie")]
#[command(version)]
#[command(about = "Generate project structures with an LLM and publish them to GitHub", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a project structure from a prompt
    Generate {
        /// What to build, in plain words
        #[arg(short, long)]
        prompt: String,

        /// Groq API key (falls back to GROQ_API_KEY, then the stored key)
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,

        /// Write the generated tree as JSON to this file
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    /// Write a saved tree to disk as real files
    Export {
        /// Tree JSON produced by `genie generate --save`
        #[arg(long, value_name = "FILE")]
        files: PathBuf,

        /// Directory to write into
        #[arg(short, long, value_name = "DIR")]
        out: PathBuf,
    },

    /// Create a GitHub repository and push a saved tree to it
    Publish {
        /// Name of the repository to create
        #[arg(short, long)]
        repo: String,

        /// GitHub access token (falls back to GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,

        /// Tree JSON produced by `genie generate --save`
        #[arg(long, value_name = "FILE")]
        files: PathBuf,
    },

    /// Start the HTTP service
    Serve {
        /// Server port
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },

    /// Manage the stored Groq API key
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store an API key for later runs
    SetKey {
        /// The Groq API key to store
        api_key: String,
    },

    /// Remove the stored API key
    Clear,
}
