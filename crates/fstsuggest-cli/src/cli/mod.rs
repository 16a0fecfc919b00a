use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;


pub use args::{KeyArg, LookupArgs};

#[derive(Debug, Parser)]
#[command(name = "fstsuggest")]
#[command(about = "Weight-bucketed prefix completion over a term list", version)]
pub struct Cli {
    /// Term list with one `term<TAB>bucket` entry per line.
    #[arg(long, value_name = "FILE")]
    pub terms: PathBuf,
    /// Order suggestions by text instead of by bucket weight.
    #[arg(long, default_value_t = false)]
    pub alphabetical: bool,
    /// Keep an exact match where weight ordering puts it.
    #[arg(long, default_value_t = false)]
    pub no_exact_first: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Lookup(LookupArgs),
    Bucket(KeyArg),
    Buckets,
}
