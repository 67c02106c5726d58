use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swift_storage_adapter::{
    app::AppBuilder,
    config::{init_logging, SwiftArgs},
    domain::models::{TempUrlMethod, TemporaryUrlRequest},
};

#[derive(Parser, Debug)]
#[command(name = "swift-storage-cli")]
#[command(about = "Generate temporary URLs and check the configured Swift container", long_about = None)]
struct Cli {
    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(flatten)]
    swift: SwiftArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a signed temporary URL for an object
    Url {
        /// Object URI, e.g. swift://dir/file.txt
        uri: String,
        /// Lifetime in seconds, defaults to SWIFT_TEMP_URL_TTL
        #[arg(short, long)]
        ttl: Option<u64>,
        /// HTTP method the URL is valid for
        #[arg(short, long, default_value = "GET")]
        method: TempUrlMethod,
    },

    /// Check that the container is reachable
    Ensure {
        /// Accepted for compatibility; has no effect
        #[arg(short, long)]
        force: bool,
    },

    /// Drop the cached signing key so the next URL re-reads the account
    ForgetKey,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = cli.swift.to_app_config()?;
    let app = AppBuilder::from_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    match cli.command {
        Commands::Url { uri, ttl, method } => {
            let request = TemporaryUrlRequest::builder()
                .uri(uri)
                .method(method)
                .maybe_ttl_seconds(ttl)
                .build();
            let result = app
                .signed_url_service
                .generate(request)
                .await
                .context("Failed to generate temporary URL")?;
            println!("{}", result.url);
        }
        Commands::Ensure { force } => {
            let errors = app.plugin.ensure(force).await;
            if errors.is_empty() {
                println!("ok");
            } else {
                for error in &errors {
                    eprintln!("{}", error);
                }
                anyhow::bail!("{} container check(s) failed", errors.len());
            }
        }
        Commands::ForgetKey => {
            let removed = app
                .key_store
                .invalidate()
                .await
                .context("Failed to forget signing key")?;
            println!("{}", if removed { "forgotten" } else { "no cached key" });
        }
    }

    Ok(())
}
