use crate::error::{Result, SuggestError};
use crate::models::RankingMode;

use super::ENV_RANKING;

pub(super) fn parse_ranking(raw: Option<&str>) -> Result<RankingMode> {
    let normalized = raw.map(|value| value.trim().to_ascii_lowercase());
    match normalized.as_deref() {
        None | Some("") => Ok(RankingMode::WeightFirst),
        Some("weight" | "weight-first") => Ok(RankingMode::WeightFirst),
        Some("alphabetical" | "alpha") => Ok(RankingMode::Alphabetical),
        Some(other) => Err(SuggestError::Validation(format!(
            "invalid {ENV_RANKING}: {other} (expected weight|alphabetical)"
        ))),
    }
}
