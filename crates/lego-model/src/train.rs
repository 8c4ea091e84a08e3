use serde::{Deserialize, Serialize};

/// Switches a train run passes to its wagons.
///
/// Missing keys in a serialized options file fall back to the defaults: everything off, empty passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainOptions {
    /// Running under lego-train orchestration.
    pub train_scope: bool,
    /// Attach the Qn-vector analysis task after the corrections task.
    pub run_qn_vector_analysis_task: bool,
    /// Use multiplicity instead of centrality for event classes.
    pub use_multiplicity: bool,
    pub run2_dataset: bool,
    /// Correction pass the analysis task expects to find.
    pub correction_pass: String,
    /// Pass used when the expected one is not available.
    pub alt_correction_pass: String,
}

#[cfg(test)]
mod tests {
    use super::TrainOptions;

    #[test]
    fn missing_keys_default() {
        let opts: TrainOptions = serde_json::from_str(r#"{"trainScope": true}"#).unwrap();
        assert!(opts.train_scope);
        assert!(!opts.run_qn_vector_analysis_task);
        assert!(opts.correction_pass.is_empty());
    }

    #[test]
    fn camel_case_keys() {
        let opts = TrainOptions {
            alt_correction_pass: "rec".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains("\"altCorrectionPass\":\"rec\""));
        assert!(json.contains("\"runQnVectorAnalysisTask\":false"));
    }
}
