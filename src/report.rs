use serde::Serialize;

use crate::gate::GateReport;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    aggregation: &'a str,
    passed: bool,
    checked: usize,
    offending: Vec<JsonVerdict<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonVerdict<'a> {
    name: &'a str,
    value: f64,
    threshold_ns: u64,
}

/// One line per offending benchmark; empty when the gate passed.
pub fn render_text(label: &str, report: &GateReport) -> String {
    report
        .verdicts
        .iter()
        .map(|v| format!("{}\n", v.summary(label)))
        .collect()
}

pub fn render_json(label: &str, report: &GateReport) -> Result<String, serde_json::Error> {
    let doc = JsonReport {
        aggregation: label,
        passed: report.passed,
        checked: report.checked,
        offending: report
            .verdicts
            .iter()
            .map(|v| JsonVerdict {
                name: &v.name,
                value: v.value,
                threshold_ns: u64::try_from(v.threshold.as_nanos()).unwrap_or(u64::MAX),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}

pub fn render(
    format: OutputFormat,
    label: &str,
    report: &GateReport,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(label, report)),
        OutputFormat::Json => render_json(label, report).map(|mut s| {
            s.push('\n');
            s
        }),
    }
}
