/// Error types for HAL rendering.
#[derive(Debug)]
pub enum RenderError {
    /// The render format token was not recognized.
    UnsupportedFormat(String),

    /// XML writer error.
    Xml(quick_xml::Error),

    /// JSON serialization error.
    Json(serde_json::Error),

    /// IO error while writing output.
    Io(std::io::Error),

    /// Custom error message.
    Custom(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::UnsupportedFormat(token) => {
                write!(f, "unsupported render format: {}", token)
            }
            RenderError::Xml(e) => write!(f, "XML error: {}", e),
            RenderError::Json(e) => write!(f, "JSON error: {}", e),
            RenderError::Io(e) => write!(f, "IO error: {}", e),
            RenderError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::UnsupportedFormat(_) => None,
            RenderError::Xml(e) => Some(e),
            RenderError::Json(e) => Some(e),
            RenderError::Io(e) => Some(e),
            RenderError::Custom(_) => None,
        }
    }
}

impl From<quick_xml::Error> for RenderError {
    fn from(err: quick_xml::Error) -> Self {
        RenderError::Xml(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Json(err)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

/// Result type alias for HAL rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
