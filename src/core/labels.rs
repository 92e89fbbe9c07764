use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language of the fixed labels used by the renderers. Record data is never translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Pt => &PT,
        }
    }
}

#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub techniques_section: &'static str,
    pub problems_section: &'static str,
    pub use_cases_section: &'static str,

    pub objective: &'static str,
    pub monitored_signals: &'static str,
    pub relevant_algorithms: &'static str,
    pub recommended_use: &'static str,
    pub algorithms_short: &'static str,
    pub use_short: &'static str,
    pub operational_practices: &'static str,
    pub best_practices: &'static str,
    pub related_problems: &'static str,

    pub symptoms: &'static str,
    pub causes: &'static str,
    pub detection: &'static str,
    pub mitigation: &'static str,

    pub risks: &'static str,
    pub monitoring_focus: &'static str,
    pub kpis: &'static str,

    pub available_techniques: &'static str,
    pub monitored_problems: &'static str,
    pub mapped_use_cases: &'static str,

    pub list_techniques: &'static str,
    pub list_problems: &'static str,
    pub list_use_cases: &'static str,
}

static EN: Labels = Labels {
    title: "Model Monitoring Quick Guide",
    subtitle: "Educational tool supporting classes on operating machine learning models in production.",
    techniques_section: "Monitoring Techniques",
    problems_section: "Recurring Production Problems",
    use_cases_section: "Use Cases",

    objective: "Objective",
    monitored_signals: "Monitored signals",
    relevant_algorithms: "Relevant algorithms/tests",
    recommended_use: "Recommended use",
    algorithms_short: "Algorithms/tests",
    use_short: "Use",
    operational_practices: "Operational best practices",
    best_practices: "Best practices",
    related_problems: "Related problems",

    symptoms: "Symptoms",
    causes: "Common causes",
    detection: "How to detect",
    mitigation: "Mitigation actions",

    risks: "Production risks",
    monitoring_focus: "Monitoring focus",
    kpis: "Recommended KPIs",

    available_techniques: "Available techniques",
    monitored_problems: "Monitored problems",
    mapped_use_cases: "Mapped use cases",

    list_techniques: "Techniques",
    list_problems: "Problems",
    list_use_cases: "Use cases",
};

static PT: Labels = Labels {
    title: "Guia rápido de monitoramento de modelos",
    subtitle: "Ferramenta educacional para apoiar aulas sobre operação de modelos de machine learning em produção.",
    techniques_section: "Técnicas de monitoramento",
    problems_section: "Problemas recorrentes em produção",
    use_cases_section: "Casos de uso",

    objective: "Objetivo",
    monitored_signals: "Sinais acompanhados",
    relevant_algorithms: "Algoritmos ou testes relevantes",
    recommended_use: "Uso indicado",
    algorithms_short: "Algoritmos/testes",
    use_short: "Uso",
    operational_practices: "Boas práticas operacionais",
    best_practices: "Boas práticas",
    related_problems: "Problemas relacionados",

    symptoms: "Sintomas",
    causes: "Causas comuns",
    detection: "Como detectar",
    mitigation: "Ações de mitigação",

    risks: "Riscos de produção",
    monitoring_focus: "Foco de monitoramento",
    kpis: "KPIs recomendados",

    available_techniques: "Técnicas disponíveis",
    monitored_problems: "Problemas monitorados",
    mapped_use_cases: "Casos de uso mapeados",

    list_techniques: "Técnicas",
    list_problems: "Problemas",
    list_use_cases: "Casos de uso",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().labels().list_techniques, "Techniques");
    }

    #[test]
    fn test_locale_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }

        let parsed: Wrapper = toml::from_str("locale = \"pt\"").unwrap();
        assert_eq!(parsed.locale, Locale::Pt);
        assert!(toml::from_str::<Wrapper>("locale = \"fr\"").is_err());
    }
}
