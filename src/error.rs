use thiserror::Error;

/// Errors surfaced by the typing test
#[derive(Debug, Error)]
pub enum TyperError {
    #[error(
        "=> Minimum Terminal Size : {min_columns} x {min_rows}\n=> Current Terminal Size : {columns} x {rows}"
    )]
    TerminalTooSmall {
        min_columns: u16,
        min_rows: u16,
        columns: u16,
        rows: u16,
    },

    #[error("passage must contain at least one non-whitespace character")]
    EmptyPassage,

    #[error("built-in passage data is malformed: {0}")]
    PassageData(String),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small_message_lists_required_and_actual_size() {
        let err = TyperError::TerminalTooSmall {
            min_columns: 80,
            min_rows: 20,
            columns: 70,
            rows: 15,
        };

        assert_eq!(
            err.to_string(),
            "=> Minimum Terminal Size : 80 x 20\n=> Current Terminal Size : 70 x 15"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: TyperError = io.into();
        assert!(matches!(err, TyperError::Io(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
