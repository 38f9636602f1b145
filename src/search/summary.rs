//! Summary Selection
//!
//! Picks a canned summary sentence for a query. Rules are evaluated in order
//! and the first one whose trigger occurs in the lowercased query wins, so a
//! query mentioning both "contract" and "patent" gets the contract summary.

use super::types::RelevantDocument;

pub const NO_RESULTS_SUMMARY: &str = "No relevant documents found for your query.";

pub const CONTRACT_SUMMARY: &str = "Based on the legal documents, a valid contract requires several essential \
elements including offer, acceptance, consideration, capacity, and lawful purpose. \
All parties must have legal capacity and the contract's purpose must be lawful.";

pub const EMPLOYMENT_SUMMARY: &str = "Employment law covers various aspects of the employer-employee relationship, \
including wage and hour regulations, workplace safety, and anti-discrimination \
protections. Employers must comply with federal standards and provide safe \
working conditions.";

pub const IP_SUMMARY: &str = "Intellectual property rights protect creations of the mind through patents, \
trademarks, copyrights, and trade secrets. Each type of protection serves \
different purposes and has specific duration and requirements.";

struct SummaryRule {
    triggers: &'static [&'static str],
    summary: &'static str,
}

static SUMMARY_RULES: &[SummaryRule] = &[
    SummaryRule {
        triggers: &["contract"],
        summary: CONTRACT_SUMMARY,
    },
    SummaryRule {
        triggers: &["employment", "employee"],
        summary: EMPLOYMENT_SUMMARY,
    },
    SummaryRule {
        triggers: &[
            "patent",
            "trademark",
            "copyright",
            "intellectual property",
            "ip",
        ],
        summary: IP_SUMMARY,
    },
];

/// Chooses the summary for `query` given the final result list.
///
/// `query` is the original, un-lowercased query text.
pub fn summarize(query: &str, results: &[RelevantDocument]) -> String {
    if results.is_empty() {
        return NO_RESULTS_SUMMARY.to_string();
    }

    let query_lower = query.to_lowercase();

    SUMMARY_RULES
        .iter()
        .find(|rule| {
            rule.triggers
                .iter()
                .any(|trigger| query_lower.contains(trigger))
        })
        .map(|rule| rule.summary.to_string())
        .unwrap_or_else(|| generic_summary(results.len()))
}

fn generic_summary(count: usize) -> String {
    format!(
        "Found {} relevant legal document(s) related to your query. \
         The documents provide information on various aspects of law including contracts, \
         employment regulations, and intellectual property rights.",
        count
    )
}
