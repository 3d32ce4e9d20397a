mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::analysis::Finding;
use miette::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Findings for one analyzed file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the analyzed AST document
    pub file: PathBuf,

    /// Unused styles, in definition order
    pub findings: Vec<Finding>,
}

impl FileReport {
    pub fn new(file: PathBuf, findings: Vec<Finding>) -> Self {
        Self { file, findings }
    }
}

/// Output format for reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Reporter for outputting unused-style findings
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
        }
    }

    /// Report the findings
    pub fn report(&self, reports: &[FileReport]) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new();
                reporter.report(reports)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone());
                reporter.report(reports)
            }
        }
    }
}

/// Total finding count across files
pub fn total_findings(reports: &[FileReport]) -> usize {
    reports.iter().map(|r| r.findings.len()).sum()
}
