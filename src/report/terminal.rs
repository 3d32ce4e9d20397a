use super::{total_findings, FileReport};
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, reports: &[FileReport]) -> Result<()> {
        let total = total_findings(reports);
        if total == 0 {
            println!("{}", "No unused styles found!".green().bold());
            return Ok(());
        }

        println!();
        println!(
            "{}",
            format!("Found {} unused styles:", total).yellow().bold()
        );
        println!();

        for report in reports {
            if report.findings.is_empty() {
                continue;
            }

            // File header
            println!("{}", report.file.display().to_string().cyan().bold());

            for finding in &report.findings {
                let location = finding
                    .loc
                    .map(|loc| loc.to_string())
                    .unwrap_or_else(|| "-".to_string());

                println!(
                    "  {} {} {}",
                    location.dimmed(),
                    "warning".yellow().bold(),
                    finding.message()
                );
            }

            println!();
        }

        self.print_summary(reports, total);

        Ok(())
    }

    fn print_summary(&self, reports: &[FileReport], total: usize) {
        let files_with_findings = reports.iter().filter(|r| !r.findings.is_empty()).count();

        println!("{}", "─".repeat(60).dimmed());
        println!(
            "Summary: {} in {} of {} files",
            format!("{} unused styles", total).yellow(),
            files_with_findings,
            reports.len()
        );
        println!(
            "{}",
            "Tip: styles passed through helpers the analyzer cannot resolve are counted as used"
                .dimmed()
        );
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
