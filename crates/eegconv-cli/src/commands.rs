//! Subcommand implementations.

use anyhow::{Context, Result};
use tracing::info;

use eegconv_channels::AliasTable;
use eegconv_cli::pipeline::{
    MneTools, PipelineRequest, PipelineSummary, convert_bdf_to_fiff, landmark_path_for,
};
use eegconv_model::PositionOptions;
use eegconv_positions::convert_positions;

use crate::cli::{PipelineArgs, PositionsArgs};
use crate::summary::print_alias_table;

pub fn run_positions(args: &PositionsArgs) -> Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| landmark_path_for(&args.input));
    let options = PositionOptions::default()
        .with_overwrite(args.overwrite)
        .with_index_base(args.index_base.into());

    convert_positions(&args.input, &output, &options)
        .with_context(|| format!("convert {}", args.input.display()))?;
    info!(output = %output.display(), "landmark file written");
    println!("Wrote {}", output.display());
    Ok(())
}

pub fn run_pipeline(args: &PipelineArgs) -> Result<PipelineSummary> {
    let request = PipelineRequest {
        raw_input: args.raw_input.clone(),
        output: args.output.clone(),
        digitizer: args.digitizer.clone(),
        overwrite: args.overwrite,
    };
    convert_bdf_to_fiff(&MneTools::default(), &request)
}

pub fn run_aliases() -> Result<()> {
    print_alias_table(&AliasTable::default_montage());
    Ok(())
}
