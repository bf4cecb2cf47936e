use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Per-tick numerics are infallible by construction (positive floors are
/// enforced at particle creation, the temperature factor is clamped), so
/// errors only arise from configuration validation, entity construction and
/// data export.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A value that must be finite was NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFinite(String),

    /// An export or query was attempted on an empty dataset.
    #[error("empty data: {0}")]
    EmptyData(String),

    /// Propagated I/O errors from data exports.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("particle_count must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("particle_count"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: Error = io.into();
        assert!(format!("{e}").contains("gone"));
    }
}
