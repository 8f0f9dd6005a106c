use anyhow::Result;
use clap::{Parser, Subcommand};
use klaviyo_client::{AuthProvider, EnvTokenSource, KlaviyoClient};
use klaviyo_client::transport::ReqwestTransport;
use klaviyo_config::Settings;
use klaviyo_mcp::McpServer;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "klaviyo-mcp")]
#[command(about = "MCP tool server for the Klaviyo REST API", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdio
    Serve,

    /// List the published tools
    Tools {
        /// Print each tool's input schema as well
        #[arg(short, long, action = clap::ArgAction::SetTrue)]
        schemas: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let settings = if cli.config.exists() {
        info!("loading configuration from {:?}", cli.config);
        Settings::from_yaml(&cli.config)?
    } else {
        info!("no config file, using environment");
        Settings::from_env()?
    };

    let client = build_client(&settings)?;

    match cli.command {
        Commands::Serve => {
            McpServer::new(client).serve_stdio().await?;
        }
        Commands::Tools { schemas } => {
            list_tools(&client, schemas);
        }
    }

    Ok(())
}

fn build_client(settings: &Settings) -> Result<KlaviyoClient> {
    let transport = ReqwestTransport::new(Duration::from_secs(settings.transport.timeout_secs))?;
    let auth = AuthProvider::new(Arc::new(EnvTokenSource::new(settings.api.token_env.as_str())));
    Ok(KlaviyoClient::new(
        settings.base_url(),
        Arc::new(transport),
        auth,
    ))
}

fn list_tools(client: &KlaviyoClient, schemas: bool) {
    let tools = klaviyo_api::list_tools(client);
    println!("{} tools:", tools.len());
    for tool in tools {
        println!("  {} - {}", tool.name(), tool.description());
        if schemas {
            println!("    {}", tool.schema());
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "info" };

    // Stdout belongs to the protocol; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
