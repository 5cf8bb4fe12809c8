use anyhow::Result;

use namemove_cli::pipeline;
use namemove_cli::types::{InspectResult, RunResult};
use namemove_model::{RunConfig, RunMode};

use crate::cli::{InspectArgs, RunArgs};

pub fn run_match(args: &RunArgs) -> Result<RunResult> {
    let config = RunConfig {
        input: args.input.clone(),
        sources: args.sources.clone(),
        destination: args.destination.clone(),
        mode: if args.dry_run {
            RunMode::Simulate
        } else {
            RunMode::Perform
        },
    };
    pipeline::run(&config)
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    pipeline::inspect(&args.input, &args.sources)
}
