//! microserver: a minimal synchronous HTTP/1.1 GET server.
//!
//! Handler groups are registered through static route descriptors before the
//! listener starts accepting; requests are matched by exact path, with query
//! parameters bound to handler arguments (defaults included). Paths without
//! a registered route fall back to static files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use microserver::{demo, Registry, Server, StaticDir};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "microserver")]
#[command(about = "A minimal GET web server with declarative handler registration", long_about = None)]
struct Args {
    /// Fully qualified handler type to register (defaults to scanning the
    /// demo namespace)
    handler: Option<String>,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Directory served for paths without a registered route
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Number of worker threads (1 = strictly serial connection handling)
    #[arg(short, long, default_value_t = 4)]
    threads: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // registration phase: completes before the listener starts accepting
    let mut registry = Registry::new(demo::catalog());
    match &args.handler {
        Some(name) => {
            if let Err(e) = registry.register_by_name(name) {
                error!(handler = name.as_str(), error = %e, "handler registration failed");
                return ExitCode::FAILURE;
            }
            info!(handler = name.as_str(), "registered handler");
        }
        None => {
            let n = registry.scan_namespace(demo::NAMESPACE);
            info!(namespace = demo::NAMESPACE, classes = n, "scanned namespace");
        }
    }

    let server = match Server::<Registry>::builder(("127.0.0.1", args.port)) {
        Ok(mut builder) => {
            builder
                .thread_count(args.threads)
                .static_files(StaticDir::new(&args.static_dir));
            builder.build(registry)
        }
        Err(e) => {
            error!(error = %e, "invalid listen address");
            return ExitCode::FAILURE;
        }
    };

    info!(port = args.port, "starting microserver");
    if let Err(e) = server.serve() {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
