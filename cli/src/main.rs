mod args;
mod terminal;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::bail;
use clap::Parser;

use args::CommandLine;
use bmchunt_common::config::ScanConfig;
use bmchunt_common::success;
use bmchunt_common::target::{self, Target};
use bmchunt_core::probe::HttpProber;
use bmchunt_core::{engine, report};
use terminal::{logging, progress};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();

    logging::init();

    let cfg = ScanConfig::default();
    let targets = enumerate(&commands)?;

    let started = Instant::now();
    let prober = Arc::new(HttpProber::new(cfg.timeout)?);

    let bar = progress::scan_bar(targets.len() as u64);
    let bar_updater = bar.clone();
    let on_probe_complete: engine::ProgressFn =
        Box::new(move |completed| bar_updater.set_position(completed as u64));

    let matches = engine::run_all(targets, &cfg, prober, Some(on_probe_complete)).await;
    bar.finish_and_clear();

    let report_path = report::write_report(&matches, Path::new("."))?;

    success!(
        "{} BMC login page(s) found in {:.1}s, report written to {}",
        matches.len(),
        started.elapsed().as_secs_f64(),
        report_path.display()
    );

    Ok(())
}

fn enumerate(commands: &CommandLine) -> anyhow::Result<Vec<Target>> {
    match (&commands.subnet, &commands.rhosts) {
        (Some(subnet), None) => Ok(target::targets_from_subnet(subnet)?),
        (None, Some(path)) => Ok(target::targets_from_rhosts(path)?),
        // clap's arg group guarantees exactly one option is present.
        _ => bail!("exactly one of --subnet or --rhosts is required"),
    }
}
