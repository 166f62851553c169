//! The engine's sole output type.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;

/// A computed commissioning test result.
///
/// Constructed fresh on every invocation and never mutated afterwards.
/// `calculations` and `checks` preserve insertion order so reports list
/// metrics in the order the routine produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedResult {
    /// Derived engineering metrics, keyed by metric name
    pub calculations: IndexMap<String, f64>,
    /// Named acceptance judgments, keyed by check name
    pub checks: IndexMap<String, CheckResult>,
    /// Overall verdict: true iff every check passed
    pub pass: bool,
    /// One-line digest of the key computed values
    pub summary: String,
}

impl ComputedResult {
    /// Assembles a result from a routine's calculations and checks.
    ///
    /// `pass` is always derived here as the conjunction of the check
    /// verdicts; routines never set it independently, so the invariant
    /// `pass == AND(checks)` holds by construction. An empty check set
    /// (all checks skipped for missing data) passes vacuously.
    pub fn new(
        calculations: IndexMap<String, f64>,
        checks: IndexMap<String, CheckResult>,
        summary: String,
    ) -> Self {
        let pass = checks.values().all(|c| c.pass);
        Self {
            calculations,
            checks,
            pass,
            summary,
        }
    }

    /// Renders the result as a compact Markdown fragment.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "**{}** - {}\n\n",
            if self.pass { "PASS" } else { "FAIL" },
            self.summary
        ));

        if !self.calculations.is_empty() {
            output.push_str("| Metric | Value |\n");
            output.push_str("|--------|-------|\n");
            for (name, value) in &self.calculations {
                output.push_str(&format!("| {} | {:.4} |\n", name, value));
            }
            output.push('\n');
        }

        if !self.checks.is_empty() {
            output.push_str("| Check | Value | Target | Status | Message |\n");
            output.push_str("|-------|-------|--------|--------|--------|\n");
            for (name, check) in &self.checks {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    name,
                    check.value,
                    check.target,
                    if check.pass { "PASS" } else { "FAIL" },
                    check.message
                ));
            }
        }

        output
    }
}
