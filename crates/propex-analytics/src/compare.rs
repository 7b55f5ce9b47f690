//! Side-by-side comparison of two scenarios.

use propex_core::ScenarioInput;

use crate::error::AnalyticsResult;
use crate::roi::{compute_scenario, ScenarioResult};

/// Evaluates two scenarios independently for a side-by-side comparison.
///
/// Both evaluations share the single formula body in
/// [`compute_scenario`]; there is no interaction between the two results.
///
/// # Errors
///
/// Fails if either scenario fails evaluation; the first failing scenario
/// short-circuits.
pub fn compare_scenarios(
    a: &ScenarioInput,
    b: &ScenarioInput,
) -> AnalyticsResult<(ScenarioResult, ScenarioResult)> {
    Ok((compute_scenario(a)?, compute_scenario(b)?))
}
