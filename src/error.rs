use thiserror::Error;

/// Main error type for the reelgraph library
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Video error: {0}")]
    Video(#[from] VideoError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Color parsing errors
#[derive(Error, Debug)]
pub enum ColorError {
    #[error("Invalid hex color format: '{input}' (expected '#' followed by 3 or 6 hex digits)")]
    InvalidFormat { input: String },
}

/// Layout resolution errors
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unsupported aspect ratio: {width}:{height} (supported: 16:9, 9:16, 1:1, 4:5)")]
    UnsupportedAspectRatio { width: u32, height: u32 },

    #[error("Invalid layout parameters: {details}")]
    InvalidParameters { details: String },
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Missing asset: {name}")]
    Missing { name: String },

    #[error("Failed to decode asset: {name} - {reason}")]
    DecodeFailed { name: String, reason: String },

    #[error("Failed to load font: {path}")]
    FontLoadFailed { path: String },
}

/// Frame source/sink errors
#[derive(Error, Debug)]
pub enum VideoError {
    #[error("Failed to read frame {index}: {reason}")]
    ReadFailed { index: u64, reason: String },

    #[error("Failed to write frame {index}: {reason}")]
    WriteFailed { index: u64, reason: String },

    #[error("Failed to open frame source: {path}")]
    OpenFailed { path: String },

    #[error("Invalid video parameters: {details}")]
    InvalidParameters { details: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path} - {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using OverlayError
pub type Result<T> = std::result::Result<T, OverlayError>;

impl OverlayError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Check if this error leaves the current clip salvageable.
    ///
    /// Recoverable errors reject one input (a color string, one asset) and the
    /// caller can fix the config or skip the element; the rest abort the
    /// clip's overlay pass.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Color(_) => true,
            Self::Asset(AssetError::Missing { .. }) => true,
            _ => false,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Color(ColorError::InvalidFormat { input }) => {
                format!("'{}' is not a valid hex color. Use '#rgb' or '#rrggbb'.", input)
            }
            Self::Layout(LayoutError::UnsupportedAspectRatio { width, height }) => {
                format!(
                    "Aspect ratio {}:{} is not supported. This clip's overlay was not applied.",
                    width, height
                )
            }
            Self::Asset(AssetError::Missing { name }) => {
                format!("Asset '{}' was not found under the asset root.", name)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
