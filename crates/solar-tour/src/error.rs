//! Error types for recoverable failures.
//!
//! None of these reach the end user: asset errors fold into fallbacks
//! (untextured surface, missing label, missing model) and are only logged.

/// Failure to load one asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The host could not fetch the resource (network error, 404, ...).
    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },

    /// The resource arrived but its bytes could not be decoded.
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    /// The typeface JSON was malformed.
    #[error("bad typeface {path}: {source}")]
    Typeface {
        path: String,
        #[source]
        source: TypefaceError,
    },

    /// The glTF binary was malformed.
    #[error("bad model {path}: {source}")]
    Model {
        path: String,
        #[source]
        source: GlbError,
    },

    /// The payload kind does not match what the slot expects.
    #[error("unexpected payload for {0}")]
    Mismatch(String),
}

/// Failure to parse a typeface JSON document.
#[derive(Debug, thiserror::Error)]
pub enum TypefaceError {
    #[error("invalid typeface json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("glyph {glyph:?}: unknown outline command {command:?}")]
    UnknownCommand { glyph: char, command: String },

    #[error("glyph {glyph:?}: outline ends in the middle of a command")]
    Truncated { glyph: char },

    #[error("glyph {glyph:?}: bad number {token:?}")]
    BadNumber { glyph: char, token: String },

    #[error("resolution must be positive, got {0}")]
    BadResolution(f32),
}

/// Failure to parse a binary glTF container.
#[derive(Debug, thiserror::Error)]
pub enum GlbError {
    #[error("not a glTF binary (magic {0:#010x})")]
    BadMagic(u32),

    #[error("unsupported glTF container version {0}")]
    UnsupportedVersion(u32),

    #[error("container shorter than declared: need {needed} bytes, have {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("first chunk must be JSON, found type {0:#010x}")]
    MissingJson(u32),

    #[error("invalid JSON chunk: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to parse a `TourConfig` override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse tour config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tour config: {0}")]
    Invalid(String),
}
