//! liveviz - command-line tool for the live visualization service.
//!
//! Thin wrapper over `liveviz_client`: checks connectivity, dumps server
//! state, deletes structures and runs a short end-to-end demo.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liveviz_client::{ClientConfig, ManagedStructure, Metadata, StructureKind, VisualizerClient};

/// Live visualization service client
#[derive(Parser, Debug)]
#[command(name = "liveviz")]
#[command(about = "Drive and inspect a live data-structure visualization service")]
#[command(version)]
struct Cli {
    /// Service base URL (overrides config file and LIVEVIZ_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Log client failures
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the service answers
    Ping,
    /// List all structures
    List,
    /// Show one structure
    Show {
        /// Structure name
        name: String,
    },
    /// Show the aggregate matrix view
    Matrix,
    /// Delete a structure
    Delete {
        /// Structure name
        name: String,
    },
    /// Create a structure, add/update/remove a node, then delete it
    Demo {
        /// Structure name
        #[arg(default_value = "demo_list")]
        name: String,

        /// Structure kind (linked_list, array, tree, graph)
        #[arg(short, long, default_value = "linked_list")]
        kind: StructureKind,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "liveviz=info,liveviz_client=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load();
    if let Some(url) = cli.url {
        config.base_url = url;
    }
    if cli.verbose {
        config.verbose = true;
    }

    tracing::debug!("Using service at {}", config.base_url);
    let mut client = VisualizerClient::from_config(&config)
        .with_context(|| format!("Failed to create client for {}", config.base_url))?;

    match cli.command {
        Command::Ping => ping(&mut client),
        Command::List => print_json(&Value::Array(client.get_all_structures())),
        Command::Show { name } => print_json(&client.get_structure(&name)),
        Command::Matrix => print_json(&client.get_matrix()),
        Command::Delete { name } => {
            let deleted = client.delete_structure(&name);
            println!("delete {}: {}", name, deleted);
            Ok(())
        }
        Command::Demo { name, kind } => demo(&mut client, &name, kind),
    }
}

fn ping(client: &mut VisualizerClient) -> Result<()> {
    if client.is_connected() {
        println!("connected: {}", client.base_url());
        Ok(())
    } else {
        eprintln!("not connected: {}", client.base_url());
        std::process::exit(1);
    }
}

fn print_json(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to format response")?;
    println!("{}", text);
    Ok(())
}

/// Walk one node through its lifecycle inside a managed structure.
fn demo(client: &mut VisualizerClient, name: &str, kind: StructureKind) -> Result<()> {
    tracing::info!("Running demo on '{}' ({})", name, kind);

    let mut structure = ManagedStructure::new(client, name, kind, 1);

    let Some(id) = structure.add_node(&json!(42), None, &Metadata::new()) else {
        println!("add_node: not created");
        return Ok(());
    };
    println!("add_node: id {}", id);

    let mut metadata = Metadata::new();
    metadata.insert("color".to_string(), json!("red"));
    println!(
        "update_node: {}",
        structure.update_node(id, &json!(99), &metadata)
    );

    print_json(&structure.get_structure())?;

    println!("remove_node: {}", structure.remove_node(id));
    Ok(())
}
