mod boot;
mod cli;
mod render;

use std::io::Write;
use std::sync::Arc;

use medroute_ai::Oracle;
use medroute_common::MedrouteError;
use medroute_coordinator::{Coordinator, SessionEvent, APP_NAME};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter};

#[tokio::main]
async fn main() -> medroute_common::Result<()> {
    // Environment first so the API key is visible to config resolution.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("warning: failed to read .env: {e}");
        }
    }

    let args = cli::parse();

    // Logging comes up before config so loader warnings are visible; the
    // configured level is applied once the file is read.
    let (filter, filter_handle) = reload::Layer::new(log_filter(args.log_level.as_deref()));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = medroute_config::load_config(args.config.as_deref())?;
    if let Some(model) = &args.model {
        config.oracle.model = model.clone();
    }
    if args.log_level.is_none() {
        let configured = log_filter(Some(config.logging.level.directive()));
        if let Err(e) = filter_handle.reload(configured) {
            tracing::warn!("failed to apply configured log level: {e}");
        }
    }

    tracing::info!("medroute v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    if args.print_config {
        println!("{}", medroute_config::config_to_json(&config));
        return Ok(());
    }

    let oracle: Arc<dyn Oracle> = match boot::build_oracle(&config) {
        Ok(oracle) => oracle,
        Err(e) => {
            tracing::error!("oracle unavailable, every turn will fail: {e}");
            Arc::new(boot::UnavailableOracle::new(&e))
        }
    };
    let settings = boot::coordinator_settings(&config);
    let followup_wait = settings.followup_delay;

    let mut coordinator = Coordinator::new(oracle, settings);
    let renderer = tokio::spawn(render_events(coordinator.subscribe()));

    // Replay anything appended before the renderer subscribed.
    for message in coordinator.messages() {
        println!("{}", render::format_message(&message));
    }

    if let Err(e) = coordinator.connect().await {
        tracing::warn!("could not open oracle session at startup: {e}");
    }

    match args.message {
        Some(text) => {
            let reply = coordinator.send(&text).await;
            if reply.as_ref().is_some_and(|m| m.is_routing) {
                tokio::time::sleep(followup_wait + std::time::Duration::from_millis(100)).await;
            }
        }
        None => run_repl(&mut coordinator).await?,
    }

    coordinator.shutdown();
    if let Err(e) = renderer.await {
        tracing::warn!("renderer task failed: {e}");
    }
    tracing::info!("Shutdown complete");
    Ok(())
}

/// `RUST_LOG` plus the given directive, defaulting to `medroute=info`.
fn log_filter(directive: Option<&str>) -> EnvFilter {
    let directive = directive.unwrap_or("medroute=info");
    match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("warning: invalid log filter {directive:?} ({e}), using medroute=info");
            EnvFilter::new("medroute=info")
        }
    }
}

/// Read user turns from stdin until EOF, `/quit` or Ctrl-C.
async fn run_repl(coordinator: &mut Coordinator) -> Result<(), MedrouteError> {
    println!("{APP_NAME}. Type /agents for the agent panel, /quit to exit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/agents" => println!(
                "{}",
                render::format_agent_panel(coordinator.active_agent(), coordinator.is_busy())
            ),
            "/usage" => {
                let usage = coordinator.usage();
                println!(
                    "{} calls, {} failed, {} tokens",
                    usage.call_count(),
                    usage.failure_count(),
                    usage.total_tokens()
                );
            }
            text => {
                coordinator.send(text).await;
            }
        }
    }
    Ok(())
}

/// Print session events until every sender is gone.
async fn render_events(mut rx: Receiver<SessionEvent>) {
    loop {
        match rx.recv().await {
            Ok(SessionEvent::MessageAppended(message)) => {
                // The user already sees what they typed.
                if message.sender != medroute_coordinator::Sender::User {
                    println!("{}", render::format_message(&message));
                }
            }
            Ok(SessionEvent::AgentActivated(agent)) if agent.is_delegate() => {
                let info = agent.info();
                println!("    ({} {} is now active)", info.icon, info.name);
            }
            Ok(SessionEvent::TurnStarted) => tracing::debug!("turn started"),
            Ok(_) => {}
            Err(RecvError::Lagged(n)) => tracing::warn!("renderer skipped {n} events"),
            Err(RecvError::Closed) => break,
        }
    }
}
