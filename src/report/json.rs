use crate::types::report::GaugeReport;

pub fn to_json(report: &GaugeReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
