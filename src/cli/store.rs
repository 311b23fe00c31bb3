use std::path::PathBuf;

use clap::Parser;

use crate::{prelude::*, store::memory::InMemoryStore};

#[derive(Parser)]
pub struct StoreArgs {
    /// TOML file with the facilities and their observations.
    #[clap(
        long = "store",
        env = "OBSERVATIONS_PATH",
        default_value = "observations.toml",
        global = true
    )]
    path: PathBuf,
}

impl StoreArgs {
    pub fn load(&self) -> Result<InMemoryStore> {
        InMemoryStore::read_toml(&self.path)
    }
}
