// Pro settings explorer entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout carries only reports)
// 2. Load the built-in config
// 3. Fetch the leaderboard page and extract players
// 4. Print the startup reports
// 5. Run the interactive lookup loop until `exit` or end of input

mod repl;

use std::io::{BufRead, Write};

use prosens_core::config::Config;
use prosens_core::fetch::{HttpPageSource, PageSource};
use prosens_core::{loader, report};

use anyhow::Context;
use rand::Rng;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;

    // 2. Load config
    let config = Config::builtin().context("failed to load built-in configuration")?;

    // 3-5. Fetch, report, interact
    let source = HttpPageSource::new(&config.source).context("failed to set up HTTP client")?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(
        &source,
        &config,
        stdin.lock(),
        stdout.lock(),
        &mut rand::thread_rng(),
    )
    .await?;

    info!("Exiting");
    Ok(())
}

/// Fetch and extract players, print the startup reports, then run the
/// interactive loop. A failed fetch returns before anything reaches `output`.
async fn run_session<S, I, O, R>(
    source: &S,
    config: &Config,
    input: I,
    mut output: O,
    rng: &mut R,
) -> anyhow::Result<()>
where
    S: PageSource + ?Sized,
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let (store, summary) = match loader::load_players(source, &config.extraction).await {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Fetch failed: {}", e);
            return Err(e).context("could not download the leaderboard page");
        }
    };
    info!(
        "Loaded {} players ({} rows scanned, truncated: {})",
        store.len(),
        summary.rows,
        summary.truncated
    );

    output.write_all(report::render_startup(&store).as_bytes())?;
    repl::run(&store, &config.query, input, output, rng).context("interactive loop failed")
}

/// Initialize tracing to stderr. `RUST_LOG` overrides the default `warn` level.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
