use crate::types::report::AdvisorReport;

pub fn to_json(report: &AdvisorReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;

    #[test]
    fn json_report_contains_score_and_priorities() {
        let report = fixtures::report(1.0, 30.0, false, 4.0, 0.0);

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("rendered json should parse");
        assert!(value["prediction"]["score"].is_number());
        assert_eq!(value["recommendations"][0]["priority"], "CRITICAL");
        assert_eq!(value["metrics"]["tier"], "needs_improvement");
        assert!(value.get("artifacts").is_none());
    }
}
