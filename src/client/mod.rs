//! Validated credentials for a LiveCoding API application.
//!
//! A [`Client`] is built once from a set of named credentials, merged with
//! defaults, checked field by field and then frozen. Only the accessors are
//! available afterwards.

pub mod credentials;
pub mod error;

pub use credentials::Credential;
pub use error::Error;

use credentials::Credentials;

use crate::core::types::{ClientId, ClientSecret, Field, RedirectUrl, State};
use crate::scope::Scope;
use crate::storage::Storage;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{event, Level};
use url::Url;

pub const AUTHORIZE_URL: &str = "https://www.livecoding.tv/o/authorize/";

pub const ENV_VARS: [(Field, &str); 5] = [
    (Field::Id, "LIVECODING_CLIENT_ID"),
    (Field::Secret, "LIVECODING_CLIENT_SECRET"),
    (Field::RedirectUrl, "LIVECODING_REDIRECT_URL"),
    (Field::Scope, "LIVECODING_SCOPE"),
    (Field::Storage, "LIVECODING_STORAGE"),
];

#[derive(Debug)]
pub struct Client {
    id: ClientId,
    secret: ClientSecret,
    redirect_url: RedirectUrl,
    scope: Box<dyn Scope>,
    storage: Box<dyn Storage>,
}

impl Client {
    /// Builds a client from `(key, value)` pairs.
    ///
    /// Recognized keys are `id`, `secret`, `redirectUrl`, `scope` and
    /// `storage`. Anything else is ignored. Missing keys fall back to an empty
    /// string, [`ReadScope`](crate::scope::ReadScope) and
    /// [`SessionStorage`](crate::storage::SessionStorage) respectively.
    pub fn new<I, K, V>(credentials: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Credential>,
    {
        credentials
            .into_iter()
            .fold(Self::builder(), |builder, (k, v)| builder.credential(k.as_ref(), v))
            .build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Builds a client from a JSON object of credentials.
    ///
    /// Scopes and storages are given by name, e.g.
    /// `{"id": "...", "secret": "...", "redirectUrl": "...", "scope": "read"}`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        Self::new(map)
    }

    /// Builds a client from `LIVECODING_*` environment variables. Unset or
    /// non-unicode variables are treated as absent.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(
            ENV_VARS
                .iter()
                .filter_map(|(field, var)| std::env::var(var).ok().map(|v| (field.as_str(), v))),
        )
    }

    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn secret(&self) -> &ClientSecret {
        &self.secret
    }

    pub fn redirect_url(&self) -> &RedirectUrl {
        &self.redirect_url
    }

    pub fn scope(&self) -> &dyn Scope {
        self.scope.as_ref()
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Link the user follows to grant this application access.
    pub fn authorize_url(&self, state: &State) -> Result<Url, Error> {
        let mut url = Url::parse(AUTHORIZE_URL)?;
        url.query_pairs_mut()
            .append_pair("scope", self.scope.as_str())
            .append_pair("state", state.as_ref())
            .append_pair("redirect_uri", self.redirect_url.as_ref())
            .append_pair("response_type", "code")
            .append_pair("client_id", self.id.as_ref());
        Ok(url)
    }
}

impl Serialize for Client {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Client", 4)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("redirectUrl", &self.redirect_url)?;
        s.serialize_field("scope", self.scope.as_str())?;
        s.serialize_field("storage", self.storage.name())?;
        s.end()
    }
}

#[derive(Debug, Default)]
pub struct ClientBuilder {
    credentials: Credentials,
}

impl ClientBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.credentials.set(Field::Id, Credential::Text(id.into()));
        self
    }

    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.credentials.set(Field::Secret, Credential::Text(secret.into()));
        self
    }

    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.credentials.set(Field::RedirectUrl, Credential::Text(url.into()));
        self
    }

    pub fn scope<S: Scope + 'static>(mut self, scope: S) -> Self {
        self.credentials.set(Field::Scope, Credential::Scope(Box::new(scope)));
        self
    }

    pub fn storage<S: Storage + 'static>(mut self, storage: S) -> Self {
        self.credentials.set(Field::Storage, Credential::Storage(Box::new(storage)));
        self
    }

    /// Sets a credential by key name. Unrecognized keys are ignored.
    pub fn credential(mut self, key: &str, value: impl Into<Credential>) -> Self {
        self.credentials.merge(key, value.into());
        self
    }

    #[tracing::instrument(skip_all)]
    pub fn build(self) -> Result<Client, Error> {
        let v = self.credentials.validate()?;
        event!(Level::TRACE, client_id = %v.id.0, scope = v.scope.as_str(), "Client configured");

        Ok(Client {
            id: v.id,
            secret: v.secret,
            redirect_url: v.redirect_url,
            scope: v.scope,
            storage: v.storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ChatScope;
    use crate::storage::SessionStorage;

    fn client() -> Client {
        Client::builder()
            .id("abc")
            .secret("xyz")
            .redirect_url("http://x/cb")
            .build()
            .expect("valid client")
    }

    #[test]
    fn builder_applies_defaults() {
        let client = client();
        assert_eq!(client.scope().as_str(), "read");
        assert_eq!(client.storage().name(), "session");
    }

    #[test]
    fn builder_accepts_typed_capabilities() {
        let client = Client::builder()
            .id("abc")
            .secret("xyz")
            .redirect_url("http://x/cb")
            .scope(ChatScope)
            .storage(SessionStorage::new())
            .build()
            .expect("valid client");
        assert_eq!(client.scope().as_str(), "chat");
    }

    #[test]
    fn builder_rejects_empty_secret() {
        let err = Client::builder()
            .id("abc")
            .secret("")
            .redirect_url("http://x/cb")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidClientSecret));
    }

    #[test]
    fn builder_debug_hides_secret() {
        let builder = Client::builder()
            .id("abc")
            .secret("hunter2")
            .redirect_url("http://x/cb");
        assert!(!format!("{:?}", builder).contains("hunter2"));

        let builder = Client::builder().credential("secret", "hunter2");
        assert!(!format!("{:?}", builder).contains("hunter2"));
    }

    #[test]
    fn client_debug_hides_stored_values() {
        let client = client();
        client.storage().put("access_token", "tok-123".to_string());
        let printed = format!("{:?}", client);
        assert!(!printed.contains("tok-123"));
        assert!(!printed.contains("xyz"));
    }

    #[test]
    fn authorize_url_carries_client_parameters() {
        let url = client()
            .authorize_url(&State("s1".to_string()))
            .expect("url");
        assert_eq!(url.path(), "/o/authorize/");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("scope".to_string(), "read".to_string()),
                ("state".to_string(), "s1".to_string()),
                ("redirect_uri".to_string(), "http://x/cb".to_string()),
                ("response_type".to_string(), "code".to_string()),
                ("client_id".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn serialization_omits_secret() {
        let value = serde_json::to_value(&client()).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "id": "abc",
                "redirectUrl": "http://x/cb",
                "scope": "read",
                "storage": "session",
            })
        );
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
