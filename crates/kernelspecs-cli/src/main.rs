//! `kernelspecs` - list the kernel specs a kernel server offers
//!
//! Configuration is layered: `.env` file, then `KERNELSPECS_*` environment
//! variables, then command-line flags.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

use kernelspecs_core::{get_specs, KernelSpec, KernelSpecs, ServerSettings, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(name = "kernelspecs")]
#[command(about = "List the kernel specs offered by a kernel server", long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(long, env = "KERNELSPECS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// API token
    #[arg(long, env = "KERNELSPECS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = kernelspecs_core::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all valid kernel specs (default)
    List,
    /// Show a single kernel spec
    Show {
        /// Kernel name
        name: String,
    },
}

impl Cli {
    fn settings(&self) -> ServerSettings {
        let mut settings = ServerSettings::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout));
        if let Some(token) = &self.token {
            settings = settings.with_token(token.clone());
        }
        settings
    }
}

/// Initialize tracing with compact, colored output on stderr
///
/// RUST_LOG takes precedence over the default filter.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info")
            .add_directive("kernelspecs_core=debug".parse().expect("static directive"))
    });

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .compact()
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

fn print_table(specs: &KernelSpecs) {
    let width = specs.names().map(str::len).max().unwrap_or(0);
    for spec in specs.iter() {
        let marker = if specs.default_name() == Some(spec.name.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:width$}  {:<12}  {}",
            marker,
            spec.name,
            spec.language,
            spec.display_name,
            width = width
        );
    }
}

/// Strings print bare; anything else the validator passed through prints as JSON
fn display_value(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}

fn print_spec(spec: &KernelSpec) {
    println!("name:         {}", spec.name);
    println!("display_name: {}", spec.display_name);
    println!("language:     {}", spec.language);
    println!("argv:         {}", spec.argv.join(" "));
    if let Some(env) = &spec.env {
        for (key, value) in env {
            println!("env:          {}={}", key, display_value(value));
        }
    }
    for (key, value) in &spec.resources {
        println!("resource:     {} -> {}", key, display_value(value));
    }
}

/// Fetch the specs, logging the settings in use and any failure
async fn load_specs(settings: &ServerSettings) -> Result<KernelSpecs> {
    info!(
        "Using kernel server {} (token: {}, timeout: {}s)",
        settings.base_url,
        if settings.token.is_some() { "set" } else { "unset" },
        settings.timeout.as_secs()
    );

    match get_specs(Some(settings)).await {
        Ok(specs) => Ok(specs),
        Err(e) => {
            error!("Failed to load kernel specs: {}", e);
            Err(e).with_context(|| format!("Failed to load kernel specs from {}", settings.base_url))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let settings = cli.settings();

    let specs = load_specs(&settings).await?;

    match cli.cmd.unwrap_or(Commands::List) {
        Commands::List => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&specs)?);
            } else {
                print_table(&specs);
            }
        }
        Commands::Show { name } => {
            let spec = specs
                .get(&name)
                .with_context(|| format!("No kernel spec named '{}'", name))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(spec)?);
            } else {
                print_spec(spec);
            }
        }
    }

    Ok(())
}
