use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use workflow::config::LineupConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Cascade an RF lineup into a single budget")]
struct Args {
    /// YAML lineup: a shared frequency axis and an ordered list of stages
    #[arg(long)]
    lineup: PathBuf,
    /// Also report the running cascade after each stage
    #[arg(long, default_value_t = false)]
    progressive: bool,
    /// Emit the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = LineupConfig::load(&args.lineup)?;
    let report = Runner::new(config).execute(args.progressive)?;

    if args.json {
        let encoded =
            serde_json::to_string_pretty(&report).context("encoding report as JSON")?;
        println!("{}", encoded);
    } else {
        print!("{}", report.render());
    }

    Ok(())
}
