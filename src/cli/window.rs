use chrono::Utc;
use clap::Parser;

use crate::{
    cli::{analysis::AnalysisArgs, output::OutputFormat, source::SourceArgs},
    core::planner::Planner,
    prelude::*,
    tables::build_charging_window_table,
};

#[derive(Parser)]
pub struct WindowArgs {
    /// Charging duration in whole hours.
    #[clap(long = "hours", env = "CHARGING_HOURS")]
    duration_hours: u32,

    #[clap(flatten)]
    source: SourceArgs,

    #[clap(flatten)]
    analysis: AnalysisArgs,

    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table")]
    format: OutputFormat,
}

impl WindowArgs {
    #[instrument(skip_all, fields(duration_hours = self.duration_hours))]
    pub async fn run(self) -> Result {
        let source = self.source.new_client()?;
        let (clean_fuels, resolution) = self.analysis.configure();
        let window = Planner::builder()
            .source(&source)
            .clean_fuels(clean_fuels)
            .resolution(resolution)
            .build()
            .optimal_charging_window(Utc::now(), self.duration_hours)
            .await?;
        self.format.print(&window, build_charging_window_table)
    }
}
