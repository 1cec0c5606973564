use std::io;

use anyhow::Context;
use expert::{ChatConfig, ConsoleReader, JsonFileStore, Session};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // logs go to stderr so the conversation on stdout stays readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("expert=warn")))
        .init();

    let config = ChatConfig::default();
    let store = JsonFileStore::new(&config.knowledge_path);
    let stdin = io::stdin();

    let mut session = Session::open(
        config,
        store,
        ConsoleReader::new(stdin.lock()),
        io::stdout(),
        rand::thread_rng(),
    )
    .context("failed to start chat session")?;

    session.run().context("chat session aborted")?;
    Ok(())
}
