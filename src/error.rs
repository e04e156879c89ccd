use thiserror::Error;

/// Main error type for the tracker table layer.
/// Aggregates errors from dependencies and internal modules. Sorting itself never
/// fails; these surface from configuration, dispatch and formatting.
#[derive(Error, Debug)]
pub enum TrackerTableError {
    #[error("{0}")]
    AnyhowError(#[from] anyhow::Error),

    // Module errors
    #[error("{0}")]
    ConfigError(#[from] crate::config::ConfigError),

    #[error("{0}")]
    DispatchError(#[from] crate::dispatch::DispatchError),

    #[error("{0}")]
    FormatError(#[from] crate::format::FormatError),
}

pub type Result<T, E = TrackerTableError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchError;
    use crate::table::TableId;

    #[test]
    fn test_module_errors_convert() {
        fn dispatch() -> Result<()> {
            Err(DispatchError::UnknownTable(TableId::new("scores")))?
        }
        let error = dispatch().unwrap_err();
        assert!(matches!(error, TrackerTableError::DispatchError(_)));
        assert_eq!(error.to_string(), "Table 'scores' is not registered");
    }
}
