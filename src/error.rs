use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellnessError {
    #[error("unknown factor: {0}")]
    UnknownFactor(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("score for {factor} must be between 1 and 10 (got {score})")]
    InvalidScore { factor: String, score: f64 },

    #[error("specify either a factor or a category, not both")]
    AmbiguousSelector,

    #[error("factor '{factor}' appears in both '{first}' and '{second}'")]
    DuplicateFactor {
        factor: String,
        first: String,
        second: String,
    },

    #[error("schema must define at least one category")]
    EmptySchema,

    #[error("name must not be empty: {0}")]
    EmptyName(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("location not found: {0}")]
    LocationNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("store format error: {0}")]
    StoreFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WellnessError>;
