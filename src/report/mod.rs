pub mod html;
pub mod json;
pub mod md;

use crate::error::GaugeError;
use crate::types::report::GaugeReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Html,
}

pub fn render(
    text: &str,
    report: &GaugeReport,
    format: OutputFormat,
) -> Result<String, GaugeError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(GaugeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Html => Ok(html::to_html(text, report)),
    }
}
