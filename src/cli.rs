mod average;
mod facilities;
mod month;
mod sequence;
mod store;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        average::AverageArgs,
        facilities::FacilitiesArgs,
        sequence::SequenceArgs,
        store::StoreArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        let store = self.store.load()?;
        match self.command {
            Command::Facilities(args) => args.run(&store),
            Command::Average(args) => args.run(&store),
            Command::Sequence(args) => args.run(&store),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List the facilities.
    #[clap(name = "facilities")]
    Facilities(FacilitiesArgs),

    /// Report the average daily consumption of each facility in the month.
    #[clap(name = "average")]
    Average(AverageArgs),

    /// Plan which facility to service on each of the first seven days of the month.
    #[clap(name = "sequence")]
    Sequence(Box<SequenceArgs>),
}
