use crate::model::PhaseInput;

/// Parse a JSON array of phases, the shape the REST layer hands over.
///
/// Dates may arrive as ISO strings, and unknown fields are ignored;
/// validation of the dates themselves happens in the layout pipeline.
pub fn phases_from_str(json: &str) -> Result<Vec<PhaseInput>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DateInput, PhaseStatus};

    #[test]
    fn parses_phase_array() {
        let json = r#"[
            {"id": "a", "name": "Design", "start_date": "2024-01-10",
             "end_date": "2024-01-20", "status": "in_progress"},
            {"id": "b", "name": "Build", "start_date": null, "end_date": null}
        ]"#;
        let phases = phases_from_str(json).unwrap();
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].status, PhaseStatus::InProgress);
        assert!(matches!(phases[0].start_date, Some(DateInput::Date(_))));
        assert_eq!(phases[1].start_date, None);
        assert_eq!(phases[1].status, PhaseStatus::Pending);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(phases_from_str("{not json").is_err());
    }
}
