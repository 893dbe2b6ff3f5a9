//! Types for the Trustify DA vulnerability analysis API.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Vulnerability severity, ordered from least to most severe.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Minor impact, remediation can wait for routine upgrades.
    Low,
    /// Should be scheduled for remediation.
    Medium,
    /// Possibly exploitable behavior in some circumstances.
    High,
    /// Should fix as soon as possible, may be under active exploitation.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let severity = format!("{self:?}");
        write!(f, "{}", severity.to_lowercase())
    }
}

/// Error parsing a severity level name.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
#[error("unknown severity level {0:?}")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(ParseSeverityError(input.into())),
        }
    }
}

/// Vulnerability analysis report returned by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AnalysisReport {
    /// Dependency counts covered by the scan.
    pub scanned: Option<Scanned>,
    /// Analysis results keyed by provider name.
    #[serde(default, deserialize_with = "null_default")]
    pub providers: HashMap<String, ProviderReport>,
}

/// Number of dependencies included in the scan.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
#[serde(default)]
pub struct Scanned {
    pub total: u32,
    pub direct: u32,
    pub transitive: u32,
}

/// Results reported by a single vulnerability data provider.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ProviderReport {
    /// Outcome of querying this provider.
    pub status: Option<ProviderStatus>,
    /// Provider results keyed by vulnerability source name.
    #[serde(default, deserialize_with = "null_default")]
    pub sources: HashMap<String, SourceReport>,
}

/// Outcome of querying a provider.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProviderStatus {
    pub ok: bool,
    pub name: String,
    pub code: u16,
    pub message: Option<String>,
}

/// Dependency findings from a single vulnerability source.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SourceReport {
    pub summary: Option<SourceSummary>,
    #[serde(default, deserialize_with = "null_default")]
    pub dependencies: Vec<DependencyReport>,
}

/// Issue counts for one vulnerability source.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
#[serde(default)]
pub struct SourceSummary {
    pub direct: u32,
    pub transitive: u32,
    pub total: u32,
    pub dependencies: u32,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub remediations: u32,
    pub recommendations: u32,
}

/// Findings for a single dependency.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReport {
    /// Package URL of the dependency.
    #[serde(rename = "ref")]
    pub purl: String,
    #[serde(default, deserialize_with = "null_default")]
    pub issues: Vec<Issue>,
    /// Findings for transitive dependencies introduced by this dependency.
    #[serde(default, deserialize_with = "null_default")]
    pub transitive: Vec<DependencyReport>,
    /// Highest ranked vulnerability affecting this dependency, if any.
    pub highest_vulnerability: Option<Issue>,
    /// Remediation recommendation, usually a package URL to upgrade to.
    pub recommendation: Option<String>,
}

/// A single vulnerability affecting a dependency.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub cvss_score: Option<f32>,
    #[serde(default, deserialize_with = "null_default")]
    pub cves: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

/// Deserialize explicit `null` as the type's default value.
///
/// The backend serializer emits `null` rather than omitting empty
/// collections at some levels of the report.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
