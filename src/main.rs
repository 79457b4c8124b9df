use clap::Parser;
use sigv4_proxy::{
    AppState, EnvCredentials, Signer, SignerConfig, config::DEFAULT_REGION,
    config::DEFAULT_SERVICE, create_app,
};
use std::sync::Arc;

// Server configuration
const HOST: &str = "0.0.0.0";
const PORT: u16 = 3000;

/// sigv4-proxy: produces SigV4-signed request descriptors for an AWS service
#[derive(Parser, Debug)]
#[command(name = "sigv4-proxy")]
#[command(about = "Sign requests for a fixed AWS service endpoint and return them as JSON", long_about = None)]
struct Cli {
    /// Path to a JSON or YAML signer configuration file (overrides the target flags)
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = PORT)]
    port: u16,

    /// Host of the target AWS endpoint
    #[arg(long, env = "AWS_HOST")]
    aws_host: Option<String>,

    /// Service name used in the credential scope
    #[arg(long, env = "SIGNING_SERVICE", default_value = DEFAULT_SERVICE)]
    service: String,

    /// Region used in the credential scope
    #[arg(long, env = "SIGNING_REGION", default_value = DEFAULT_REGION)]
    region: String,
}

impl Cli {
    fn signer_config(&self) -> Result<SignerConfig, String> {
        if let Some(path) = &self.config {
            let config = SignerConfig::from_file(path)
                .map_err(|e| format!("failed to load config file '{}': {}", path, e))?;
            tracing::info!("Loaded configuration from {}", path);
            return Ok(config);
        }

        let config = SignerConfig {
            host: self.aws_host.clone().unwrap_or_default(),
            service: self.service.clone(),
            region: self.region.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse command line arguments
    let cli = Cli::parse();

    let config = match cli.signer_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Invalid signer configuration: {}", e);
            tracing::error!(
                "Set AWS_HOST (or --aws-host), or pass --config <path> / CONFIG_PATH."
            );
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Signing for service '{}' in region '{}' at host {}",
        config.service,
        config.region,
        config.host
    );

    // Credentials are read from the environment on every request
    let signer = Signer::new(config, Arc::new(EnvCredentials::new()));
    let app = create_app(AppState::new(signer));

    // Start server
    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Signing proxy listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
