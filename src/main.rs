use fragment_loader::host::{self, HostExit};
use fragment_loader::{FragmentLoader, HttpTransport, LoaderConfig};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = LoaderConfig::from_env()?;
    let transport = HttpTransport::from_config(&config)?;
    info!(
        base_url = %transport.base_url(),
        policy = %config.response_policy,
        "loading initial fragment"
    );
    let mut loader = FragmentLoader::from_config(transport, &config);

    let exit = host::run(
        &mut loader,
        host::stdin_lines(),
        interrupts(),
        &mut std::io::stdout(),
    )
    .await?;
    if exit == HostExit::Abandoned {
        warn!(in_flight = loader.in_flight(), "exiting with requests still pending");
    }
    Ok(())
}

/// Forwards every Ctrl-C for the life of the process.
fn interrupts() -> mpsc::UnboundedReceiver<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}
