pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Catalog CLI - inspect record schemas and compile list filters")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, conflicts_with = "json", help = "Output in YAML format")]
    pub yaml: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Inspect registered record schemas")]
    Describe {
        #[command(subcommand)]
        cmd: commands::describe::DescribeCommands,
    },

    #[command(about = "Validate a filter and print the compiled SQL")]
    Find {
        #[arg(help = "Resource name")]
        resource: String,

        #[arg(help = "Filter as JSON, e.g. '{\"where\": {\"price\": {\"$gte\": 10}}}'")]
        filter: String,
    },

    #[command(about = "Run the HTTP API")]
    Serve {
        #[arg(long, short, help = "Port to listen on (defaults to API_PORT / config)")]
        port: Option<u16>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else if cli.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Describe { cmd } => commands::describe::handle(cmd, output_format),
        Commands::Find { resource, filter } => commands::find::handle(&resource, &filter, output_format),
        Commands::Serve { port } => crate::server::serve(port).await,
    }
}
