//! Demo runner for the trellis toolkit.
//!
//! Discovers demo modules by name, runs the selected set sequentially, and
//! aggregates pass/fail into the process exit code. A demo fails by
//! returning an error or panicking; the panic payload is captured and
//! logged rather than tearing the harness down. Per-demo memory deltas are
//! logged where the platform supports sampling.

mod diagnostics;

use std::fs::File;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use trellis::demos::{self, Demo, DemoOptions};

const LOG_FILE: &str = "trellis-harness.log";

#[derive(Debug, Parser)]
#[command(name = "trellis-harness", about = "Run trellis demo modules")]
#[command(group(ArgGroup::new("selection").required(true).args(["test", "all"])))]
struct Cli {
    /// Run the named demos, in order.
    #[arg(short = 't', long = "test", num_args = 1..)]
    test: Vec<String>,

    /// Run every available demo.
    #[arg(long)]
    all: bool,

    /// End each demo automatically instead of waiting for a key.
    #[arg(long)]
    auto: bool,

    /// Seconds each demo stays on screen in auto mode.
    #[arg(long, default_value_t = 5)]
    auto_time: u64,

    /// Paint frames off-screen instead of taking over the terminal.
    #[arg(long)]
    headless: bool,
}

/// Outcome of one demo run.
enum Outcome {
    Pass,
    Fail(String),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging()?;

    let selected = select_demos(&cli)?;
    tracing::info!(count = selected.len(), "running demos");

    let mut failures = 0usize;
    let mut report = Vec::with_capacity(selected.len());

    for (index, demo) in selected.iter().enumerate() {
        let title = format!("Test {}/{} - {}", index + 1, selected.len(), demo.name);
        println!("{}", demo.name);

        let outcome = run_one(demo, &cli, title);
        if matches!(outcome, Outcome::Fail(_)) {
            failures += 1;
        }
        report.push((demo.name, outcome));
    }

    for (index, (name, outcome)) in report.into_iter().enumerate() {
        match outcome {
            Outcome::Pass => tracing::info!("[PASS] {:3}: \"{}\"", index + 1, name),
            Outcome::Fail(reason) => {
                tracing::info!("[FAIL] {:3}: \"{}\"", index + 1, name);
                tracing::error!(demo = name, %reason, "demo failed");
            }
        }
    }

    let code = if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };
    tracing::info!(failures, "harness finished");
    Ok(code)
}

fn init_logging() -> Result<()> {
    let log = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Resolve the CLI selection against the demo registry.
fn select_demos(cli: &Cli) -> Result<Vec<&'static Demo>> {
    if cli.all {
        return Ok(demos::all().iter().collect());
    }
    cli.test
        .iter()
        .map(|name| match demos::find(name) {
            Some(demo) => Ok(demo),
            None => bail!(
                "unknown demo '{name}'; available: {}",
                demos::all()
                    .iter()
                    .map(|d| d.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
        .collect()
}

fn run_one(demo: &Demo, cli: &Cli, title: String) -> Outcome {
    let opts = DemoOptions {
        demo_time_s: cli.auto.then_some(cli.auto_time),
        title,
        headless: cli.headless,
    };

    let before = diagnostics::sample();
    let result = panic::catch_unwind(AssertUnwindSafe(|| (demo.run)(&opts)));
    if let (Some(before), Some(after)) = (before, diagnostics::sample()) {
        let delta = diagnostics::MemorySample::delta(before, after);
        tracing::debug!(
            demo = demo.name,
            rss_kib = delta.rss_kib,
            vm_kib = delta.vm_kib,
            "memory delta"
        );
    }

    match result {
        Ok(Ok(())) => Outcome::Pass,
        Ok(Err(err)) => Outcome::Fail(err.to_string()),
        Err(payload) => Outcome::Fail(panic_message(payload.as_ref())),
    }
}

/// Best-effort text for a panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
