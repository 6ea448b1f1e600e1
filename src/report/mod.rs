pub mod csv;
pub mod format;
pub mod json;
pub mod markdown;
pub mod stats;
pub mod terminal;

use std::fmt;

use crate::error::{Error, Result};
use crate::models::Report;
use crate::render::Renderer;

pub use terminal::TerminalReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Terminal,
    Markdown,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn from_export_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(Error::Validation(format!(
                "unsupported export format '{}', expected markdown, json or csv",
                other
            ))),
        }
    }

    pub fn from_output_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            other => Err(Error::Validation(format!(
                "unsupported output format '{}', expected terminal or json",
                other
            ))),
        }
    }

    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Terminal => None,
            Self::Markdown => Some("md"),
            Self::Json => Some("json"),
            Self::Csv => Some("csv"),
        }
    }

    pub fn render(self, report: &Report, renderer: &Renderer) -> Result<String> {
        match self {
            Self::Terminal => {
                let mut terminal = TerminalReport::new(Vec::new(), renderer);
                terminal.render(report)?;
                String::from_utf8(terminal.into_inner())
                    .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
            }
            Self::Markdown => Ok(markdown::render(report)),
            Self::Json => json::render(report),
            Self::Csv => self::csv::render(report),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Terminal => "terminal",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_parse_names() {
        assert_eq!(ReportFormat::from_export_name("MD").unwrap(), ReportFormat::Markdown);
        assert_eq!(ReportFormat::from_export_name("csv").unwrap(), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_output_name("json").unwrap(), ReportFormat::Json);

        assert!(matches!(ReportFormat::from_export_name("xml"), Err(Error::Validation(_))));
        assert!(matches!(ReportFormat::from_export_name("terminal"), Err(Error::Validation(_))));
        assert!(matches!(ReportFormat::from_output_name("csv"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ReportFormat::Markdown.extension(), Some("md"));
        assert_eq!(ReportFormat::Terminal.extension(), None);
    }

    #[test]
    fn test_formatters_agree_on_percentages() {
        let report = fixtures::full_report();
        let renderer = Renderer::plain();

        for format in [
            ReportFormat::Terminal,
            ReportFormat::Markdown,
            ReportFormat::Json,
            ReportFormat::Csv,
        ] {
            let out = format.render(&report, &renderer).unwrap();
            for expected in ["80", "20", "100", "50"] {
                assert!(out.contains(&format!("{expected}.0")), "{format} lacks {expected}.0");
            }
        }
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let report = fixtures::full_report();
        let renderer = Renderer::plain();
        for format in [ReportFormat::Markdown, ReportFormat::Json, ReportFormat::Csv] {
            assert_eq!(
                format.render(&report, &renderer).unwrap(),
                format.render(&report, &renderer).unwrap()
            );
        }
    }
}
