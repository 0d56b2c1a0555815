//! LOLWUT runner (default binary).
//!
//! Renders one piece of art to stdout and exits. Logs go to stderr so the
//! art can be piped cleanly.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use lolwut::core::SimpleRng;
use lolwut::term::TerminalRenderer;
use lolwut::{Args, Invocation};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let seed = args.seed.unwrap_or_else(rand::random::<u32>);
    debug!(seed, "random source seeded");
    let mut rng = SimpleRng::new(seed);

    let invocation = Invocation::from_args(&args.args);
    if let Some(art) = invocation.render(&mut rng)? {
        let mut term = TerminalRenderer::new();
        term.draw(&art.text, art.attribution)?;
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
