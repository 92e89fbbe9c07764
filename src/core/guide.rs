use crate::core::catalog::Catalogs;
use crate::core::formatter::{
    render_list, render_overview, render_record_by_name, render_summary,
};
use crate::core::labels::Locale;
use crate::core::resolver::resolve;
use crate::domain::ports::CatalogEntry;
use crate::utils::error::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One request against the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Overview,
    Summary,
    Technique(String),
    Problem(String),
    UseCase(String),
    List,
}

#[derive(Serialize)]
struct NameIndex<'a> {
    techniques: Vec<&'a str>,
    problems: Vec<&'a str>,
    use_cases: Vec<&'a str>,
}

impl<'a> NameIndex<'a> {
    fn from_catalogs(catalogs: &'a Catalogs) -> Self {
        fn names<T: CatalogEntry>(catalog: &[T]) -> Vec<&str> {
            catalog.iter().map(|entry| entry.name()).collect()
        }

        Self {
            techniques: names(catalogs.techniques),
            problems: names(catalogs.problems),
            use_cases: names(catalogs.use_cases),
        }
    }
}

/// Entry points of the command surface over a fixed set of catalogs.
#[derive(Debug, Clone, Copy)]
pub struct Guide {
    catalogs: Catalogs,
    locale: Locale,
    format: OutputFormat,
}

impl Default for Guide {
    fn default() -> Self {
        Self::new(Catalogs::builtin())
    }
}

impl Guide {
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            catalogs,
            locale: Locale::default(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn overview(&self) -> String {
        render_overview(&self.catalogs, self.locale)
    }

    pub fn full_guide(&self) -> String {
        render_summary(&self.catalogs, self.locale)
    }

    pub fn show_technique(&self, name: &str) -> Result<String> {
        render_record_by_name(self.catalogs.techniques, name, self.locale)
    }

    pub fn show_problem(&self, name: &str) -> Result<String> {
        render_record_by_name(self.catalogs.problems, name, self.locale)
    }

    pub fn show_use_case(&self, name: &str) -> Result<String> {
        render_record_by_name(self.catalogs.use_cases, name, self.locale)
    }

    pub fn list_all(&self) -> String {
        render_list(&self.catalogs, self.locale)
    }

    /// Run a query and return the rendered document in the configured format.
    pub fn execute(&self, query: &Query) -> Result<String> {
        tracing::debug!("Executing {:?} as {:?}", query, self.format);

        match self.format {
            OutputFormat::Text => self.execute_text(query),
            OutputFormat::Json => self.execute_json(query),
        }
    }

    fn execute_text(&self, query: &Query) -> Result<String> {
        match query {
            Query::Overview => Ok(self.overview()),
            Query::Summary => Ok(self.full_guide()),
            Query::Technique(name) => self.show_technique(name),
            Query::Problem(name) => self.show_problem(name),
            Query::UseCase(name) => self.show_use_case(name),
            Query::List => Ok(self.list_all()),
        }
    }

    fn execute_json(&self, query: &Query) -> Result<String> {
        let rendered = match query {
            Query::Overview | Query::List => {
                serde_json::to_string_pretty(&NameIndex::from_catalogs(&self.catalogs))?
            }
            Query::Summary => serde_json::to_string_pretty(&self.catalogs)?,
            Query::Technique(name) => {
                serde_json::to_string_pretty(resolve(self.catalogs.techniques, name)?)?
            }
            Query::Problem(name) => {
                serde_json::to_string_pretty(resolve(self.catalogs.problems, name)?)?
            }
            Query::UseCase(name) => {
                serde_json::to_string_pretty(resolve(self.catalogs.use_cases, name)?)?
            }
        };
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GuideError;

    #[test]
    fn test_text_queries_match_entry_points() {
        let guide = Guide::default();

        assert_eq!(guide.execute(&Query::Overview).unwrap(), guide.overview());
        assert_eq!(guide.execute(&Query::Summary).unwrap(), guide.full_guide());
        assert_eq!(guide.execute(&Query::List).unwrap(), guide.list_all());
        assert_eq!(
            guide
                .execute(&Query::Technique("monitoramento de performance".into()))
                .unwrap(),
            guide.show_technique("Monitoramento de Performance").unwrap()
        );
    }

    #[test]
    fn test_unknown_use_case_is_not_found() {
        let guide = Guide::default();
        let err = guide
            .execute(&Query::UseCase("Churn".into()))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("Use case 'Churn' not found. Options: "));
    }

    #[test]
    fn test_json_record_output() {
        let guide = Guide::default().with_format(OutputFormat::Json);
        let rendered = guide
            .execute(&Query::Problem("modelo defasado".into()))
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["name"], "Modelo defasado");
        assert_eq!(value["symptoms"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_json_name_index() {
        let guide = Guide::default().with_format(OutputFormat::Json);
        let rendered = guide.execute(&Query::List).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["techniques"].as_array().unwrap().len(), 5);
        assert_eq!(value["problems"][0], "Drift de dados");
        assert_eq!(value["use_cases"][4], "Previsão de demanda");
    }

    #[test]
    fn test_json_summary_contains_nested_algorithms() {
        let guide = Guide::default().with_format(OutputFormat::Json);
        let rendered = guide.execute(&Query::Summary).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value["techniques"][0]["algorithms"][0]["name"],
            "Population Stability Index (PSI)"
        );
    }

    #[test]
    fn test_json_lookup_failure_matches_text() {
        let text = Guide::default()
            .execute(&Query::Technique("nope".into()))
            .unwrap_err();
        let json = Guide::default()
            .with_format(OutputFormat::Json)
            .execute(&Query::Technique("nope".into()))
            .unwrap_err();

        assert!(matches!(json, GuideError::NotFound { .. }));
        assert_eq!(text.to_string(), json.to_string());
    }

    #[test]
    fn test_locale_switches_labels_only() {
        let en = Guide::default().show_problem("Drift de dados").unwrap();
        let pt = Guide::default()
            .with_locale(Locale::Pt)
            .show_problem("Drift de dados")
            .unwrap();

        assert!(en.contains("\nSymptoms:\n"));
        assert!(pt.contains("\nSintomas:\n"));
        assert_eq!(en.lines().count(), pt.lines().count());
    }
}
