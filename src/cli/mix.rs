use chrono::Utc;
use clap::Parser;

use crate::{
    cli::{analysis::AnalysisArgs, output::OutputFormat, source::SourceArgs},
    core::planner::Planner,
    prelude::*,
    tables::build_daily_mix_table,
};

#[derive(Parser)]
pub struct MixArgs {
    #[clap(flatten)]
    source: SourceArgs,

    #[clap(flatten)]
    analysis: AnalysisArgs,

    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table")]
    format: OutputFormat,
}

impl MixArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let source = self.source.new_client()?;
        let (clean_fuels, resolution) = self.analysis.configure();
        let days = Planner::builder()
            .source(&source)
            .clean_fuels(clean_fuels.clone())
            .resolution(resolution)
            .build()
            .three_days_mix(Utc::now())
            .await?;
        self.format.print(&days, |days| build_daily_mix_table(days, &clean_fuels))
    }
}
