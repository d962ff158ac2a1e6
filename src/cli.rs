mod analysis;
mod mix;
mod output;
mod source;
mod window;

use clap::{Parser, Subcommand};

use crate::{
    cli::{mix::MixArgs, window::WindowArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Average generation mix of today and the two following days (UTC).
    #[clap(name = "mix")]
    Mix(Box<MixArgs>),

    /// Find the charging window with the highest clean-energy share within the next 48 hours.
    #[clap(name = "window")]
    Window(Box<WindowArgs>),
}

impl Command {
    pub async fn run(self) -> Result {
        match self {
            Self::Mix(args) => args.run().await,
            Self::Window(args) => args.run().await,
        }
    }
}
