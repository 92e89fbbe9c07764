use serde::Serialize;
use std::fmt;

/// Algorithm or statistical test referenced by a monitoring technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Algorithm {
    pub name: &'static str,
    pub summary: &'static str,
    pub when_to_use: &'static str,
}

/// Monitoring technique with practical guidance for practitioners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technique {
    pub name: &'static str,
    pub objective: &'static str,
    pub description: &'static str,
    pub monitoring_signals: &'static [&'static str],
    pub algorithms: &'static [Algorithm],
    pub operational_tips: &'static [&'static str],
    /// Free-text labels; not checked against the problems catalog.
    pub related_problems: &'static [&'static str],
}

/// Recurring failure mode of machine learning systems in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductionProblem {
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub detection_methods: &'static [&'static str],
    pub mitigation_actions: &'static [&'static str],
}

/// Business scenario that benefits from robust monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub name: &'static str,
    pub context: &'static str,
    pub risks: &'static [&'static str],
    pub monitoring_focus: &'static [&'static str],
    pub example_kpis: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Technique,
    Problem,
    UseCase,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Technique => "Technique",
            RecordKind::Problem => "Problem",
            RecordKind::UseCase => "Use case",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
