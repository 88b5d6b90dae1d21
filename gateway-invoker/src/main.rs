//! Gateway Invoke - performs one gateway invocation and prints the result.

use std::env;
use std::io;
use std::process::ExitCode;

use gateway_invoker::cli::{self, Options};
use gateway_invoker::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    println!("gateway-invoke {}", VERSION);
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let options = Options::parse(env::args().skip(1));
    if options.version {
        print_version();
        return Ok(ExitCode::SUCCESS);
    }

    // Logs go to stderr so stdout only carries the rendered result.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load().map_err(|e| {
        format!(
            "Failed to load configuration: {}. \
             Check invoker.toml or the INVOKER__HOST / INVOKER__SCHEME environment variables.",
            e
        )
    })?;

    let outcome = cli::run(&config, &options, io::stdout()).await?;

    Ok(ExitCode::from(cli::exit_status(&outcome)))
}
