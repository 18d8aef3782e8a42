use crate::core::types::Field;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid client id")]
    InvalidClientId,
    #[error("invalid client secret")]
    InvalidClientSecret,
    #[error("invalid redirect url")]
    InvalidRedirectUrl,
    #[error("invalid scope")]
    InvalidScope,
    #[error("invalid storage")]
    InvalidStorage,
    #[error("malformed credentials: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to build url: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    pub fn invalid(field: Field) -> Self {
        match field {
            Field::Id => Self::InvalidClientId,
            Field::Secret => Self::InvalidClientSecret,
            Field::RedirectUrl => Self::InvalidRedirectUrl,
            Field::Scope => Self::InvalidScope,
            Field::Storage => Self::InvalidStorage,
        }
    }

    /// The credential that failed validation, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidClientId => Some(Field::Id),
            Self::InvalidClientSecret => Some(Field::Secret),
            Self::InvalidRedirectUrl => Some(Field::RedirectUrl),
            Self::InvalidScope => Some(Field::Scope),
            Self::InvalidStorage => Some(Field::Storage),
            Self::Json(_) | Self::Url(_) => None,
        }
    }
}
