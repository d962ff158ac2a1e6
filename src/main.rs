#![allow(clippy::doc_markdown)]

mod api;
mod cli;
mod core;
mod fmt;
mod ops;
mod prelude;
mod tables;

use clap::{Parser, crate_version};

use crate::{cli::Args, core::error::AnalysisError, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    Args::parse().command.run().await.inspect_err(|error| {
        if let Some(error) = error.downcast_ref::<AnalysisError>() {
            let status = error.status_class();
            warn!(status = status.code(), "would be reported as {status}");
        }
    })?;

    info!("done!");
    Ok(())
}
