pub type RssResult<T> = Result<T, RssError>;

#[derive(thiserror::Error, Debug)]
pub enum RssError {
    /// A mandatory element was absent (missing or empty) during assembly.
    #[error("the {tag} is required")]
    MissingRequiredField { tag: &'static str },

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RssError {
    pub fn missing(tag: &'static str) -> Self {
        Self::MissingRequiredField { tag }
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Tag name of the absent field, if this is a missing-field error.
    pub fn missing_tag(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredField { tag } => Some(tag),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RssError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}
