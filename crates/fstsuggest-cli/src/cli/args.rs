use clap::Args;

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(allow_hyphen_values = true)]
    pub key: String,
    /// Maximum number of suggestions.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub limit: i64,
}

#[derive(Debug, Args)]
pub struct KeyArg {
    #[arg(allow_hyphen_values = true)]
    pub key: String,
}
