use thiserror::Error;

/// Error types for building HAL resources.
///
/// All validation is fail-fast: errors are raised at the offending call and
/// never deferred or retried.
#[derive(Debug, Error)]
pub enum HalError {
    /// A namespace prefix was registered twice on the same factory,
    /// regardless of whether the href templates match.
    #[error("namespace prefix `{0}` is already registered")]
    DuplicateNamespace(String),

    /// A base or reference URI could not be parsed or resolved.
    #[error("invalid URI reference `{reference}`")]
    InvalidUri {
        reference: String,
        #[source]
        source: url::ParseError,
    },

    /// A record field carried a value outside the supported property types
    /// (string, integer, boolean, null).
    #[error("unsupported property type: {0}")]
    UnsupportedPropertyType(String),
}

impl HalError {
    pub(crate) fn invalid_uri(reference: &str, source: url::ParseError) -> Self {
        HalError::InvalidUri {
            reference: reference.to_string(),
            source,
        }
    }
}

/// Result type alias for HAL builder operations.
pub type Result<T> = std::result::Result<T, HalError>;
