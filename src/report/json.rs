use super::{total_findings, FileReport};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, reports: &[FileReport]) -> Result<()> {
        let report = JsonReport::from_reports(reports);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    total_findings: usize,
    files: Vec<JsonFile>,
}

#[derive(Serialize)]
struct JsonFile {
    file: String,
    findings: Vec<JsonFinding>,
}

#[derive(Serialize)]
struct JsonFinding {
    name: String,
    message: String,
    line: Option<usize>,
    column: Option<usize>,
}

impl JsonReport {
    fn from_reports(reports: &[FileReport]) -> Self {
        let files = reports
            .iter()
            .map(|report| JsonFile {
                file: report.file.to_string_lossy().to_string(),
                findings: report
                    .findings
                    .iter()
                    .map(|finding| JsonFinding {
                        name: finding.name.clone(),
                        message: finding.message(),
                        line: finding.loc.map(|loc| loc.start.line),
                        column: finding.loc.map(|loc| loc.start.column),
                    })
                    .collect(),
            })
            .collect();

        Self {
            version: "1.0",
            total_findings: total_findings(reports),
            files,
        }
    }
}
