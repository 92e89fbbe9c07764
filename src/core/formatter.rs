//! Deterministic text and Markdown rendering of catalog records.
//!
//! Line layout is a contract: blank lines between subsections, `- ` bullets in the
//! Markdown guide, and `  * ` bullets in the detail views.

use crate::core::catalog::Catalogs;
use crate::core::labels::{Labels, Locale};
use crate::core::resolver::{joined_names, resolve};
use crate::domain::model::{ProductionProblem, Technique, UseCase};
use crate::domain::ports::CatalogEntry;
use crate::utils::error::Result;

const DETAIL_BULLET: &str = "* ";
const DETAIL_INDENT: &str = "  ";

/// Single-record detail view.
pub trait RenderDetail {
    fn render_detail(&self, labels: &Labels) -> String;
}

fn format_list<S: AsRef<str>>(items: &[S], bullet: &str) -> String {
    items
        .iter()
        .map(|item| format!("{bullet}{}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every non-blank line of `text`.
fn indent(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn detail_list<S: AsRef<str>>(items: &[S]) -> String {
    indent(&format_list(items, DETAIL_BULLET), DETAIL_INDENT)
}

fn title_block(name: &str) -> Vec<String> {
    vec![
        name.to_string(),
        "=".repeat(name.chars().count()),
        String::new(),
    ]
}

impl RenderDetail for Technique {
    fn render_detail(&self, labels: &Labels) -> String {
        let algorithms: Vec<String> = self
            .algorithms
            .iter()
            .map(|a| {
                format!(
                    "{}: {} ({}: {})",
                    a.name, a.summary, labels.use_short, a.when_to_use
                )
            })
            .collect();

        let mut lines = title_block(self.name);
        lines.extend([
            format!("{}: {}", labels.objective, self.objective),
            self.description.to_string(),
            String::new(),
            format!("{}:", labels.monitored_signals),
            detail_list(self.monitoring_signals),
            String::new(),
            format!("{}:", labels.algorithms_short),
            detail_list(&algorithms),
            String::new(),
            format!("{}:", labels.best_practices),
            detail_list(self.operational_tips),
            String::new(),
            format!(
                "{}: {}",
                labels.related_problems,
                self.related_problems.join(", ")
            ),
        ]);
        lines.join("\n")
    }
}

impl RenderDetail for ProductionProblem {
    fn render_detail(&self, labels: &Labels) -> String {
        let mut lines = title_block(self.name);
        lines.extend([
            format!("{}:", labels.symptoms),
            detail_list(self.symptoms),
            String::new(),
            format!("{}:", labels.causes),
            detail_list(self.causes),
            String::new(),
            format!("{}:", labels.detection),
            detail_list(self.detection_methods),
            String::new(),
            format!("{}:", labels.mitigation),
            detail_list(self.mitigation_actions),
        ]);
        lines.join("\n")
    }
}

impl RenderDetail for UseCase {
    fn render_detail(&self, labels: &Labels) -> String {
        let mut lines = title_block(self.name);
        lines.extend([
            self.context.to_string(),
            String::new(),
            format!("{}:", labels.risks),
            detail_list(self.risks),
            String::new(),
            format!("{}:", labels.monitoring_focus),
            detail_list(self.monitoring_focus),
            String::new(),
            format!("{}:", labels.kpis),
            detail_list(self.example_kpis),
        ]);
        lines.join("\n")
    }
}

pub fn render_record<T: RenderDetail>(record: &T, locale: Locale) -> String {
    record.render_detail(locale.labels())
}

/// Resolve `name` in `catalog` and render its detail view.
pub fn render_record_by_name<T>(catalog: &[T], name: &str, locale: Locale) -> Result<String>
where
    T: CatalogEntry + RenderDetail,
{
    let record = resolve(catalog, name)?;
    Ok(render_record(record, locale))
}

/// Three lines, one per catalog: techniques, problems, use cases.
pub fn render_overview(catalogs: &Catalogs, locale: Locale) -> String {
    let labels = locale.labels();
    [
        format!(
            "{}: {}",
            labels.available_techniques,
            joined_names(catalogs.techniques)
        ),
        format!(
            "{}: {}",
            labels.monitored_problems,
            joined_names(catalogs.problems)
        ),
        format!(
            "{}: {}",
            labels.mapped_use_cases,
            joined_names(catalogs.use_cases)
        ),
    ]
    .join("\n")
}

/// Plain enumeration of every record name, grouped by catalog.
pub fn render_list(catalogs: &Catalogs, locale: Locale) -> String {
    fn section<T: CatalogEntry>(label: &str, catalog: &[T]) -> Vec<String> {
        let mut lines = vec![format!("{label}:")];
        lines.extend(catalog.iter().map(|entry| format!("  - {}", entry.name())));
        lines
    }

    let labels = locale.labels();
    let mut lines = section(labels.list_techniques, catalogs.techniques);
    lines.push(String::new());
    lines.extend(section(labels.list_problems, catalogs.problems));
    lines.push(String::new());
    lines.extend(section(labels.list_use_cases, catalogs.use_cases));
    lines.join("\n")
}

fn technique_section(techniques: &[Technique], labels: &Labels) -> String {
    let mut lines = vec![format!("## {}", labels.techniques_section), String::new()];
    for technique in techniques {
        let algorithms: Vec<String> = technique
            .algorithms
            .iter()
            .map(|a| {
                format!(
                    "{} — {} ({}: {})",
                    a.name, a.summary, labels.recommended_use, a.when_to_use
                )
            })
            .collect();

        lines.extend([
            format!("### {}", technique.name),
            format!("**{}:** {}", labels.objective, technique.objective),
            technique.description.to_string(),
            String::new(),
            format!("**{}:**", labels.monitored_signals),
            format_list(technique.monitoring_signals, "- "),
            String::new(),
            format!("**{}:**", labels.relevant_algorithms),
            format_list(&algorithms, "- "),
            String::new(),
            format!("**{}:**", labels.operational_practices),
            format_list(technique.operational_tips, "- "),
            String::new(),
            format!(
                "**{}:** {}",
                labels.related_problems,
                technique.related_problems.join(", ")
            ),
            String::new(),
        ]);
    }
    lines.join("\n")
}

fn problem_section(problems: &[ProductionProblem], labels: &Labels) -> String {
    let mut lines = vec![format!("## {}", labels.problems_section), String::new()];
    for problem in problems {
        lines.extend([
            format!("### {}", problem.name),
            format!("**{}:**", labels.symptoms),
            format_list(problem.symptoms, "- "),
            String::new(),
            format!("**{}:**", labels.causes),
            format_list(problem.causes, "- "),
            String::new(),
            format!("**{}:**", labels.detection),
            format_list(problem.detection_methods, "- "),
            String::new(),
            format!("**{}:**", labels.mitigation),
            format_list(problem.mitigation_actions, "- "),
            String::new(),
        ]);
    }
    lines.join("\n")
}

fn use_case_section(use_cases: &[UseCase], labels: &Labels) -> String {
    let mut lines = vec![format!("## {}", labels.use_cases_section), String::new()];
    for use_case in use_cases {
        lines.extend([
            format!("### {}", use_case.name),
            use_case.context.to_string(),
            String::new(),
            format!("**{}:**", labels.risks),
            format_list(use_case.risks, "- "),
            String::new(),
            format!("**{}:**", labels.monitoring_focus),
            format_list(use_case.monitoring_focus, "- "),
            String::new(),
            format!("**{}:**", labels.kpis),
            format_list(use_case.example_kpis, "- "),
            String::new(),
        ]);
    }
    lines.join("\n")
}

/// Full Markdown guide: header, then techniques, problems and use cases.
pub fn render_summary(catalogs: &Catalogs, locale: Locale) -> String {
    let labels = locale.labels();
    let sections = [
        technique_section(catalogs.techniques, labels),
        problem_section(catalogs.problems, labels),
        use_case_section(catalogs.use_cases, labels),
    ];

    [
        format!("# {}", labels.title),
        labels.subtitle.to_string(),
        String::new(),
        sections.join("\n\n"),
    ]
    .join("\n")
}
