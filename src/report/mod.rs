pub mod json;
pub mod md;

use crate::error::AuditError;
use crate::types::report::AuditReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Flat,
    Md,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "flat" => Some(OutputFormat::Flat),
            "md" => Some(OutputFormat::Md),
            _ => None,
        }
    }
}

pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String, AuditError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AuditError::Json),
        OutputFormat::Flat => json::to_flat_json(report).map_err(AuditError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip_through_config_values() {
        assert_eq!(OutputFormat::from_name("md"), Some(OutputFormat::Md));
        assert_eq!(OutputFormat::from_name("flat"), Some(OutputFormat::Flat));
        assert_eq!(OutputFormat::from_name("sarif"), None);
    }
}
