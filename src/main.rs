use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskbridge::api::{self, middleware::SecurityConfig, AppState};
use taskbridge::config::{LlmConfig, Settings};
use taskbridge::llm::{OllamaClient, TitleExtractor};

#[derive(Parser)]
#[command(name = "taskbridge")]
#[command(about = "Turn chat messages into Taiga backlog stories")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Run one message through the full pipeline and print the outcome
    Process {
        message: String,
    },
    /// Only extract a task title from a message
    Extract {
        message: String,
    },
}

fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "taskbridge=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // One-shot commands print JSON on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    let state = AppState::from_settings(&settings)?;
    let app = api::create_router(state, SecurityConfig::from_env());

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("taskbridge listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(
        cli.command,
        Some(Commands::Process { .. }) | Some(Commands::Extract { .. })
    );
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { port, host }) => serve(&host, port).await?,
        Some(Commands::Process { message }) => {
            let settings = Settings::from_env()?;
            let outcome = AppState::from_settings(&settings)?
                .pipeline()
                .run(Some(&message))
                .await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Some(Commands::Extract { message }) => {
            let config = LlmConfig::from_env()?;
            let extractor = TitleExtractor::new(Arc::new(OllamaClient::new(&config)));
            match extractor.extract_title(&message, config.timeout).await {
                Some(title) => println!("{}", title),
                None => println!("None"),
            }
        }
        None => serve("127.0.0.1", 8000).await?,
    }

    Ok(())
}
