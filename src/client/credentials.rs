use crate::client::error::Error;
use crate::core::types::{ClientId, ClientSecret, Field, RedirectUrl};
use crate::scope::{self, ReadScope, Scope};
use crate::storage::{self, SessionStorage, Storage};

use tracing::{event, Level};

/// A value supplied for one credential key.
///
/// Scopes and storages may be given either as values or by name.
#[derive(Debug)]
pub enum Credential {
    Text(String),
    Scope(Box<dyn Scope>),
    Storage(Box<dyn Storage>),
    Other(serde_json::Value),
}

impl From<String> for Credential {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Credential {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Box<dyn Scope>> for Credential {
    fn from(scope: Box<dyn Scope>) -> Self {
        Self::Scope(scope)
    }
}

impl From<Box<dyn Storage>> for Credential {
    fn from(storage: Box<dyn Storage>) -> Self {
        Self::Storage(storage)
    }
}

impl From<serde_json::Value> for Credential {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

/// The five recognized credentials, pre-populated with defaults.
pub(crate) struct Credentials {
    id: Credential,
    secret: Credential,
    redirect_url: Credential,
    scope: Credential,
    storage: Credential,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            id: Credential::Text(String::new()),
            secret: Credential::Text(String::new()),
            redirect_url: Credential::Text(String::new()),
            scope: Credential::Scope(Box::new(ReadScope)),
            storage: Credential::Storage(Box::new(SessionStorage::new())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("secret", &"[REDACTED]")
            .field("redirect_url", &self.redirect_url)
            .field("scope", &self.scope)
            .field("storage", &self.storage)
            .finish()
    }
}

pub(crate) struct Validated {
    pub id: ClientId,
    pub secret: ClientSecret,
    pub redirect_url: RedirectUrl,
    pub scope: Box<dyn Scope>,
    pub storage: Box<dyn Storage>,
}

impl Credentials {
    pub fn set(&mut self, field: Field, value: Credential) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Secret => &mut self.secret,
            Field::RedirectUrl => &mut self.redirect_url,
            Field::Scope => &mut self.scope,
            Field::Storage => &mut self.storage,
        };
        *slot = value;
    }

    /// Overrides the default for `key`. Unrecognized keys are discarded.
    pub fn merge(&mut self, key: &str, value: Credential) {
        match key.parse::<Field>() {
            Ok(field) => self.set(field, value),
            Err(_) => event!(Level::TRACE, key, "Discarding unrecognized credential"),
        }
    }

    /// Checks each credential in field order, stopping at the first failure.
    pub fn validate(self) -> Result<Validated, Error> {
        let id = non_empty(Field::Id, self.id)?;
        let secret = non_empty(Field::Secret, self.secret)?;
        let redirect_url = non_empty(Field::RedirectUrl, self.redirect_url)?;
        let scope = check_scope(self.scope)?;
        let storage = check_storage(self.storage)?;

        Ok(Validated {
            id: ClientId(id),
            secret: ClientSecret(secret),
            redirect_url: RedirectUrl(redirect_url),
            scope,
            storage,
        })
    }
}

fn reject<T>(field: Field) -> Result<T, Error> {
    event!(Level::DEBUG, field = field.as_str(), "Rejecting credential");
    Err(Error::invalid(field))
}

// Only the literal empty string counts as empty; whitespace is kept as-is.
fn non_empty(field: Field, value: Credential) -> Result<String, Error> {
    match value {
        Credential::Text(s) if !s.is_empty() => Ok(s),
        _ => reject(field),
    }
}

fn check_scope(value: Credential) -> Result<Box<dyn Scope>, Error> {
    match value {
        Credential::Scope(scope) => Ok(scope),
        Credential::Text(name) => match scope::from_name(&name) {
            Some(scope) => Ok(scope),
            None => reject(Field::Scope),
        },
        _ => reject(Field::Scope),
    }
}

fn check_storage(value: Credential) -> Result<Box<dyn Storage>, Error> {
    match value {
        Credential::Storage(storage) => Ok(storage),
        Credential::Text(name) => match storage::from_name(&name) {
            Some(storage) => Ok(storage),
            None => reject(Field::Storage),
        },
        _ => reject(Field::Storage),
    }
}
