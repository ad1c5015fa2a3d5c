use anyhow::Context;
use bootstrap_admin::{
    Client, Invoker, Notification, client::DEFAULT_ENDPOINT, notifier::Terminal,
};
use clap::Parser;
use std::process::ExitCode;
use url::Url;

/// Provision the first admin user of a deployment.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Full URL of the `/auth/bootstrap-admin` endpoint.
    #[arg(long, env = "BOOTSTRAP_ADMIN_URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: Url,

    /// Overrides the `User-Agent` header.
    #[arg(long, env = "BOOTSTRAP_ADMIN_USER_AGENT")]
    user_agent: Option<String>,

    /// Allow a plain `http` endpoint, e.g. a deployment running locally.
    #[arg(long)]
    allow_http: bool,
}

/// Only a failed bootstrap is a failed run; an unrecognized answer was still shown in full.
fn exit_code(notification: &Notification) -> ExitCode {
    if notification.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout is reserved for the notification.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();

    let mut builder = Client::builder()
        .endpoint(args.endpoint)
        .https_only(!args.allow_http);

    if let Some(user_agent) = &args.user_agent {
        builder = builder.user_agent(user_agent);
    }

    let client = builder
        .build()
        .context("failed to configure the bootstrap-admin client")?;

    let notification = Invoker::new(client, Terminal).run().await;

    Ok(exit_code(&notification))
}
