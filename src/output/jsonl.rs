#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One file record per rule file, in walk order
//! 2. One summary record

use crate::engine::{CorpusReport, Summary};
use crate::rules::MatchEvidence;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the corpus report as JSONL
    pub fn format(&self, report: &CorpusReport) -> String {
        let mut output = String::new();

        for file in &report.files {
            let verdict = &file.verdict;
            let record = FileRecord {
                record_type: "file",
                path: file.path.display().to_string(),
                status: verdict.disposition().as_str(),
                errors: verdict
                    .errors
                    .iter()
                    .map(|e| FindingRecord {
                        category: e.category(),
                        message: e.to_string(),
                    })
                    .collect(),
                warnings: verdict.warnings.iter().map(|w| w.to_string()).collect(),
                evidence: &verdict.evidence,
            };

            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let summary = report.summary();
        let record = SummaryRecord {
            record_type: "summary",
            summary,
            status: if summary.failed > 0 { "fail" } else { "pass" },
        };
        if let Ok(json) = serde_json::to_string(&record) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, report: &CorpusReport) {
        print!("{}", self.format(report));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    path: String,
    status: &'static str,
    errors: Vec<FindingRecord>,
    warnings: Vec<String>,
    evidence: &'a [MatchEvidence],
}

#[derive(Debug, Serialize)]
struct FindingRecord {
    category: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(flatten)]
    summary: Summary,
    status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FileVerdict, Verdict};
    use crate::error::LintError;
    use std::path::PathBuf;

    fn report() -> CorpusReport {
        CorpusReport {
            files: vec![
                FileVerdict {
                    path: PathBuf::from("py/no_eval.yaml"),
                    verdict: Verdict {
                        evidence: vec![MatchEvidence {
                            line: 3,
                            content: "result = eval(user_input)".to_string(),
                            matched: "eval(".to_string(),
                        }],
                        ..Verdict::default()
                    },
                },
                FileVerdict {
                    path: PathBuf::from("c/goto.yaml"),
                    verdict: Verdict::from_errors(vec![LintError::NoMatch]),
                },
            ],
        }
    }

    #[test]
    fn test_one_line_per_file_plus_summary() {
        let output = JsonlFormatter::new().format(&report());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "file");
        assert_eq!(first["path"], "py/no_eval.yaml");
        assert_eq!(first["status"], "pass");
        assert_eq!(first["evidence"][0]["line"], 3);
        assert_eq!(first["evidence"][0]["match"], "eval(");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["status"], "error");
        assert_eq!(second["errors"][0]["category"], "no_match");
    }

    #[test]
    fn test_summary_record() {
        let output = JsonlFormatter::new().format(&report());
        let last = output.lines().last().unwrap();
        let summary: serde_json::Value = serde_json::from_str(last).unwrap();
        assert_eq!(summary["type"], "summary");
        assert_eq!(summary["files_checked"], 2);
        assert_eq!(summary["passed"], 1);
        assert_eq!(summary["failed"], 1);
        assert_eq!(summary["total_errors"], 1);
        assert_eq!(summary["status"], "fail");
    }

    #[test]
    fn test_empty_report_has_summary_only() {
        let output = JsonlFormatter::new().format(&CorpusReport::default());
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("\"status\":\"pass\""));
    }
}
