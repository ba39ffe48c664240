#![forbid(unsafe_code)]

//! Human-readable corpus report

use crate::engine::{CorpusReport, FileVerdict};
use crate::types::Disposition;
use std::io;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human formatter for corpus reports
///
/// One line per rule file with a status glyph, findings indented beneath,
/// then a summary block.
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Format the report without colour
    pub fn format(&self, report: &CorpusReport) -> String {
        let mut buffer = Buffer::no_color();
        // Writing into an in-memory buffer cannot fail.
        let _ = self.write(&mut buffer, report);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Write the report to stdout with the given colour choice
    pub fn write_to_stdout(&self, report: &CorpusReport, color: ColorChoice) -> io::Result<()> {
        let stdout = StandardStream::stdout(color);
        let mut out = stdout.lock();
        self.write(&mut out, report)
    }

    /// Write the report to any colour-capable writer
    pub fn write<W: WriteColor>(&self, out: &mut W, report: &CorpusReport) -> io::Result<()> {
        if report.files.is_empty() {
            writeln!(out, "No rule files found.")?;
            return Ok(());
        }

        writeln!(out, "Linting {} rule files...", report.files.len())?;
        writeln!(out)?;

        for file in &report.files {
            self.write_file(out, file)?;
        }

        let summary = report.summary();
        writeln!(out)?;
        writeln!(out, "=== Summary ===")?;
        writeln!(out, "Files checked:       {}", summary.files_checked)?;
        writeln!(out, "Files passed:        {}", summary.passed)?;
        writeln!(out, "Files with warnings: {}", summary.warned)?;
        writeln!(out, "Files with errors:   {}", summary.failed)?;
        writeln!(out, "Total errors:        {}", summary.total_errors)?;
        writeln!(out, "Total warnings:      {}", summary.total_warnings)?;
        writeln!(out)?;

        if summary.failed > 0 {
            colored(out, Color::Red, "Check FAILED")?;
            writeln!(out, ": {} rule file(s) with errors", summary.failed)?;
        } else if summary.warned > 0 {
            colored(out, Color::Yellow, "Check PASSED")?;
            writeln!(out, " with warnings in {} rule file(s)", summary.warned)?;
        } else {
            colored(out, Color::Green, "Check PASSED")?;
            writeln!(out, ": all rule files valid")?;
        }

        Ok(())
    }

    fn write_file<W: WriteColor>(&self, out: &mut W, file: &FileVerdict) -> io::Result<()> {
        let verdict = &file.verdict;
        let (glyph, color) = match verdict.disposition() {
            Disposition::Pass => ("✓", Color::Green),
            Disposition::Warning => ("⚠", Color::Yellow),
            Disposition::Error => ("✗", Color::Red),
        };

        colored(out, color, glyph)?;
        writeln!(out, " {}", file.path.display())?;

        for error in &verdict.errors {
            write!(out, "  - ")?;
            colored(out, Color::Red, "ERROR")?;
            writeln!(out, ": {}", error)?;
        }
        for warning in &verdict.warnings {
            write!(out, "  - ")?;
            colored(out, Color::Yellow, "WARNING")?;
            writeln!(out, ": {}", warning)?;
        }

        if verdict.disposition() == Disposition::Pass && !verdict.evidence.is_empty() {
            writeln!(out, "  Matches in reference example:")?;
            for (i, evidence) in verdict.evidence.iter().enumerate() {
                writeln!(out, "    {}. Line {}: {}", i + 1, evidence.line, evidence.content)?;
                writeln!(out, "       Match: {}", evidence.matched)?;
            }
        }

        Ok(())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn colored<W: WriteColor>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}
