//! Console output formatting for council results

use colored::Colorize;
use council_domain::{
    Answer, CouncilResult, HealthReport, HealthState, HealthStatus, Synthesis, resolve_label,
};

/// Formats council results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete council result
    pub fn format(result: &CouncilResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("LLM Council Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            result.query
        ));

        // Stage 1: Answers
        output.push_str(&Self::section_header("Stage 1: Council Answers"));
        for answer in &result.answers {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ({}) ──", answer.member_id, answer.model)
                    .yellow()
                    .bold(),
                answer.answer
            ));
        }

        // Stage 2: Peer Reviews (if any)
        if !result.reviews.is_empty() {
            output.push_str(&Self::section_header("Stage 2: Peer Reviews"));
            for review in &result.reviews {
                let ranking: Vec<String> = review
                    .ranking
                    .iter()
                    .map(|label| Self::ranked_entry(label, &result.answers))
                    .collect();
                output.push_str(&format!(
                    "\n{}\nRanking: {}\nReasoning: {}\n",
                    format!("── Review by {} ──", review.member_id).yellow().bold(),
                    ranking.join(", "),
                    review.reasoning
                ));
            }
        }

        // Stage 3: Synthesis
        output.push_str(&Self::section_header("Stage 3: Chairman Synthesis"));
        match &result.synthesis {
            Synthesis::Completed {
                model,
                final_answer,
            } => {
                output.push_str(&format!(
                    "\n{}\n\n{}\n",
                    format!("Chairman model: {model}").yellow().bold(),
                    final_answer
                ));
            }
            Synthesis::Failed { error } => {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    "Synthesis failed".red().bold(),
                    error
                ));
            }
        }

        output.push_str(&format!(
            "\n{} answers {}ms | reviews {}ms | synthesis {}ms\n",
            "Timing:".cyan().bold(),
            result.timing.answers_ms,
            result.timing.reviews_ms,
            result.timing.synthesis_ms
        ));

        output
    }

    /// Format synthesis only (concise output)
    pub fn format_synthesis_only(result: &CouncilResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== LLM Council Conclusion ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Q:".bold(), result.query));

        match &result.synthesis {
            Synthesis::Completed { final_answer, .. } => {
                output.push_str(final_answer);
                output.push('\n');
            }
            Synthesis::Failed { error } => {
                output.push_str(&format!(
                    "{} {error}\n",
                    "Synthesis failed:".red().bold()
                ));
            }
        }

        output
    }

    /// Format as JSON
    pub fn format_json(result: &CouncilResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a health report
    pub fn format_health(report: &HealthReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Council Health"));
        output.push('\n');
        for status in &report.members {
            output.push_str(&Self::health_line(status));
        }
        output.push_str(&Self::health_line(&report.chairman));

        output
    }

    /// Format a health report as JSON
    pub fn format_health_json(report: &HealthReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Annotate an anonymous ranking label with the member behind it.
    /// Labels the models made up (or mangled) stay as-is.
    fn ranked_entry(label: &str, answers: &[Answer]) -> String {
        match resolve_label(label, answers) {
            Some(member_id) => format!("{label} ({member_id})"),
            None => label.to_string(),
        }
    }

    fn health_line(status: &HealthStatus) -> String {
        let state = match status.state {
            HealthState::Healthy => status.state.as_str().green().bold(),
            HealthState::Unhealthy => status.state.as_str().yellow().bold(),
            HealthState::Unreachable => status.state.as_str().red().bold(),
        };
        match &status.detail {
            Some(detail) => format!("  {:12} {state}  ({detail})\n", status.subject_id),
            None => format!("  {:12} {state}\n", status.subject_id),
        }
    }

    fn header(title: &str) -> String {
        format!(
            "{}\n{}\n",
            "=".repeat(60).cyan(),
            format!("  {title}").cyan().bold()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("=== {title} ===").cyan().bold())
    }
}
