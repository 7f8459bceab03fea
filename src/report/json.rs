use crate::types::report::AuditReport;

pub fn to_json(report: &AuditReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn to_flat_json(report: &AuditReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&report.flatten())
}
