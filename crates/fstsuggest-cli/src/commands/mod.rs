use anyhow::{Context, Result};
use fstsuggest_core::{Completer, CompleterConfig, FstAutomaton, RankingMode, checked_limit};

use crate::cli::{Cli, Commands};

mod support;


use self::support::{load_terms, print_json};

pub(crate) fn run(cli: Cli) -> Result<()> {
    validate_command_preflight(&cli.command)?;

    let config = resolve_config(&cli)?;
    let entries = load_terms(&cli.terms)?;
    let automaton = FstAutomaton::from_bucketed_terms(
        entries
            .iter()
            .map(|entry| (entry.term.as_str(), entry.bucket)),
    )
    .context("failed to build completion automaton")?;
    tracing::debug!(
        terms = automaton.term_count(),
        bytes = automaton.size_in_bytes(),
        "loaded term list"
    );
    let completer = Completer::with_config(Some(&automaton), config)?;

    match cli.command {
        Commands::Lookup(args) => {
            let limit = checked_limit(args.limit)?;
            let completions = completer.lookup(&args.key, limit)?;
            print_json(&serde_json::json!({
                "key": args.key,
                "limit": limit,
                "ranking": completer.config().ranking.as_str(),
                "completions": completions,
            }))?;
        }
        Commands::Bucket(args) => {
            let bucket = completer.bucket_of(&args.key)?;
            print_json(&serde_json::json!({
                "key": args.key,
                "bucket": bucket,
            }))?;
        }
        Commands::Buckets => {
            print_json(&serde_json::json!({
                "bucket_count": completer.bucket_count(),
                "term_count": automaton.term_count(),
            }))?;
        }
    }
    Ok(())
}

fn validate_command_preflight(command: &Commands) -> Result<()> {
    if let Commands::Lookup(args) = command {
        checked_limit(args.limit)?;
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<CompleterConfig> {
    let mut config = CompleterConfig::from_env().context("invalid completion config")?;
    if cli.alphabetical {
        config.ranking = RankingMode::Alphabetical;
    }
    if cli.no_exact_first {
        config.exact_first = false;
    }
    Ok(config)
}
