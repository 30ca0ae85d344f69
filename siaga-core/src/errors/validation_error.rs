/// Save-time validation errors for risk entries.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("risk entry {entry_id}: {field}.{axis} score {value} outside [1,25]")]
    ScoreOutOfRange {
        entry_id: String,
        field: String,
        axis: String,
        value: i64,
    },

    #[error("risk entry {entry_id}: required field '{field}' is empty")]
    MissingField { entry_id: String, field: String },
}
