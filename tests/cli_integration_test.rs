use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_monitoring-guide"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run monitoring-guide")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_overview_command() {
    let output = run_cli(&["overview"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("Available techniques: "));
}

#[test]
fn test_list_command_counts() {
    let output = run_cli(&["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let sections: Vec<_> = text.trim_end().split("\n\n").collect();
    assert_eq!(sections.len(), 3);

    let labels = ["Techniques:", "Problems:", "Use cases:"];
    for (section, label) in sections.iter().zip(labels) {
        let mut lines = section.lines();
        assert_eq!(lines.next(), Some(label));
        assert_eq!(lines.filter(|l| l.starts_with("  - ")).count(), 5);
    }
}

#[test]
fn test_problem_lookup_is_case_insensitive() {
    let output = run_cli(&["problem", "DRIFT DE DADOS"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Drift de dados\n==============\n\n"));
}

#[test]
fn test_unknown_technique_is_usage_error() {
    let output = run_cli(&["technique", "nonexistent-technique"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains(
        "Technique 'nonexistent-technique' not found. Options: Detecção de Drift de Dados, \
         Detecção de Drift de Conceito, Monitoramento de Performance, \
         Monitoramento de Qualidade de Dados, Monitoramento de Fairness e Bias"
    ));
}

#[test]
fn test_summary_in_portuguese() {
    let output = run_cli(&["summary", "--locale", "pt"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("# Guia rápido de monitoramento de modelos\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("### ")).count(), 15);
}

#[test]
fn test_use_case_json_output() -> Result<()> {
    let output = run_cli(&["use-case", "manutenção preditiva", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(value["name"], "Manutenção preditiva");
    assert_eq!(value["example_kpis"][0], "Tempo médio entre falhas");
    Ok(())
}

#[test]
fn test_output_file_and_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("guide.toml");
    let output_path = temp_dir.path().join("docs").join("guide.md");

    std::fs::write(
        &config_path,
        format!(
            "[output]\nlocale = \"pt\"\npath = \"{}\"\n",
            output_path.to_string_lossy().replace('\\', "/")
        ),
    )?;

    let output = run_cli(&["summary", "--config", config_path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let written = std::fs::read_to_string(&output_path)?;
    assert!(written.starts_with("# Guia rápido de monitoramento de modelos\n"));
    assert!(written.ends_with('\n'));
    Ok(())
}

#[test]
fn test_missing_config_file_fails() {
    let output = run_cli(&["overview", "--config", "/definitely/not/here/guide.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load config file"));
}
