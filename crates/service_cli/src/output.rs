//! Batch rendering
//!
//! Renders sample batches as a terminal table, JSON or CSV. Rendering is kept
//! separate from printing so the formats can be tested directly.

use serde::Serialize;
use std::str::FromStr;

use crate::{CliError, Result};

/// Output format for sample batches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Boxed terminal table
    Table,
    /// Pretty-printed JSON document
    Json,
    /// `job,index,value` rows with a header
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// One named batch in a report
#[derive(Debug, Serialize, PartialEq)]
pub struct BatchReport {
    /// Job name (the sampler name for single-sampler commands)
    pub name: String,
    /// Sampler that produced the batch
    pub sampler: &'static str,
    /// Sampled values in draw order
    pub values: Vec<f64>,
}

/// A full run: the seed and every batch produced from it
#[derive(Debug, Serialize, PartialEq)]
pub struct SamplingReport {
    /// Seed of the random source
    pub seed: u64,
    /// Batches in execution order
    pub jobs: Vec<BatchReport>,
}

/// Render a report in the requested format
pub fn render(report: &SamplingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_csv(report),
    }
}

fn render_table(report: &SamplingReport) -> String {
    let mut out = format!("Seed: {}\n", report.seed);

    for job in &report.jobs {
        out.push_str(&format!("\n{} ({}, n = {})\n", job.name, job.sampler, job.values.len()));
        out.push_str("┌────────┬──────────────────┐\n");
        out.push_str("│ Index  │ Value            │\n");
        out.push_str("├────────┼──────────────────┤\n");
        if job.values.is_empty() {
            out.push_str("│ (none) │                  │\n");
        }
        for (i, value) in job.values.iter().enumerate() {
            out.push_str(&format!("│ {:<6} │ {:>16.6} │\n", i, value));
        }
        out.push_str("└────────┴──────────────────┘\n");
    }

    out
}

fn render_csv(report: &SamplingReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["job", "index", "value"])?;

    for job in &report.jobs {
        for (i, value) in job.values.iter().enumerate() {
            let index = i.to_string();
            let value = value.to_string();
            writer.write_record([job.name.as_str(), index.as_str(), value.as_str()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SamplingReport {
        SamplingReport {
            seed: 42,
            jobs: vec![
                BatchReport {
                    name: "fault_strikes".to_string(),
                    sampler: "strike",
                    values: vec![190.0, 12.5],
                },
                BatchReport {
                    name: "dips".to_string(),
                    sampler: "dip",
                    values: vec![45.0],
                },
            ],
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample_report(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["seed"], 42);
        assert_eq!(parsed["jobs"][0]["name"], "fault_strikes");
        assert_eq!(parsed["jobs"][0]["sampler"], "strike");
        assert_eq!(parsed["jobs"][0]["values"][0], 190.0);
        assert_eq!(parsed["jobs"][1]["values"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&sample_report(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "job,index,value",
                "fault_strikes,0,190",
                "fault_strikes,1,12.5",
                "dips,0,45",
            ]
        );
    }

    #[test]
    fn test_render_table() {
        let table = render(&sample_report(), OutputFormat::Table).unwrap();

        assert!(table.starts_with("Seed: 42\n"));
        assert!(table.contains("fault_strikes (strike, n = 2)"));
        assert!(table.contains("190.000000"));
        assert!(table.contains("dips (dip, n = 1)"));
    }

    #[test]
    fn test_render_table_empty_batch() {
        let report = SamplingReport {
            seed: 1,
            jobs: vec![BatchReport {
                name: "none".to_string(),
                sampler: "dip",
                values: Vec::new(),
            }],
        };
        assert!(render(&report, OutputFormat::Table)
            .unwrap()
            .contains("(none)"));
    }
}
