use std::collections::HashSet;

use trustify_da_types::{AnalysisReport, Severity};

/// Collect the highest vulnerability severity of every dependency.
///
/// Traverses providers, their sources, and each source's dependencies;
/// dependencies without a recorded highest vulnerability contribute
/// nothing. Duplicate severities collapse into the set.
pub fn all_highest_severities(report: &AnalysisReport) -> HashSet<Severity> {
    report
        .providers
        .values()
        .flat_map(|provider| provider.sources.values())
        .flat_map(|source| source.dependencies.iter())
        .filter_map(|dependency| dependency.highest_vulnerability.as_ref())
        .map(|issue| issue.severity)
        .collect()
}

/// Check whether any observed severity is more severe than the ceiling.
///
/// The comparison is strict: a severity equal to the ceiling does not
/// count as exceeding it.
pub fn exceeds_allowed_severity(severities: &HashSet<Severity>, allowed: Severity) -> bool {
    severities.iter().any(|severity| *severity > allowed)
}

/// Evaluate a report against the allowed severity ceiling.
pub fn fails_build(report: &AnalysisReport, allowed: Severity) -> bool {
    exceeds_allowed_severity(&all_highest_severities(report), allowed)
}

#[cfg(test)]
mod tests {
    use maplit::hashset;

    use super::*;

    fn report() -> AnalysisReport {
        serde_json::from_str(include_str!("../../tests/fixtures/analysis_report.json")).unwrap()
    }

    #[test]
    fn severities_across_providers_and_sources() {
        let severities = all_highest_severities(&report());

        let expected = hashset! { Severity::Critical, Severity::High, Severity::Medium };
        assert_eq!(severities, expected);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let report = report();
        assert_eq!(all_highest_severities(&report), all_highest_severities(&report));
    }

    #[test]
    fn report_without_highest_vulnerabilities_yields_empty_set() {
        let report: AnalysisReport = serde_json::from_str(
            r#"{
                "providers": {
                    "osv": {
                        "sources": {
                            "osv": {
                                "dependencies": [
                                    { "ref": "pkg:npm/left-pad@1.3.0" },
                                    { "ref": "pkg:npm/lodash@4.17.21", "issues": [] }
                                ]
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        assert!(all_highest_severities(&report).is_empty());
    }

    #[test]
    fn empty_report_yields_empty_set() {
        assert!(all_highest_severities(&AnalysisReport::default()).is_empty());
    }

    #[test]
    fn exceeds_is_strict() {
        let severities = hashset! { Severity::Critical, Severity::High, Severity::Medium };
        assert!(exceeds_allowed_severity(&severities, Severity::High));
        assert!(exceeds_allowed_severity(&severities, Severity::Medium));
        assert!(!exceeds_allowed_severity(&severities, Severity::Critical));

        let severities = hashset! { Severity::High, Severity::Medium, Severity::Low };
        assert!(!exceeds_allowed_severity(&severities, Severity::High));

        assert!(!exceeds_allowed_severity(&hashset! { Severity::Low }, Severity::Medium));
        assert!(exceeds_allowed_severity(&hashset! { Severity::Medium }, Severity::Low));
        assert!(!exceeds_allowed_severity(
            &hashset! { Severity::Low, Severity::Medium },
            Severity::Medium
        ));
        assert!(!exceeds_allowed_severity(&hashset! { Severity::Low }, Severity::Low));
    }

    #[test]
    fn nothing_exceeds_an_empty_set() {
        assert!(!exceeds_allowed_severity(&HashSet::new(), Severity::Low));
    }

    #[test]
    fn report_fails_build_below_critical_ceiling() {
        let report = report();

        assert!(fails_build(&report, Severity::High));
        assert!(fails_build(&report, Severity::Medium));
        assert!(fails_build(&report, Severity::Low));
        assert!(!fails_build(&report, Severity::Critical));
    }
}
