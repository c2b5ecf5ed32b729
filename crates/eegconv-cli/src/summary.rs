//! Console output for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Table};

use eegconv_channels::AliasTable;
use eegconv_cli::pipeline::PipelineSummary;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

/// Print the default alias table.
pub fn print_alias_table(table_data: &AliasTable) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Original"),
        header_cell("Renamed"),
        header_cell("Type"),
        header_cell("Code"),
    ]);
    apply_table_style(&mut table);
    for rule in &table_data.rules {
        table.add_row(vec![
            rule.original.clone(),
            rule.renamed.clone(),
            rule.channel_type.to_string(),
            rule.channel_type.type_code().to_string(),
        ]);
    }
    println!("{table}");
}

/// Print a pipeline run summary.
pub fn print_pipeline_summary(summary: &PipelineSummary) {
    println!("Output: {}", summary.output.display());
    if let Some(landmarks) = &summary.landmarks {
        println!("Landmarks: {}", landmarks.display());
    }
    println!("Channels remapped: {}", summary.channels_remapped);
}
