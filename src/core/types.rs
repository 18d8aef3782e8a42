use std::str::FromStr;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Eq, PartialEq)]
pub struct ClientSecret(pub String);

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClientSecret([REDACTED])")
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct RedirectUrl(pub String);

impl AsRef<str> for RedirectUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Opaque value round-tripped through the `state` parameter of an
/// authorization request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State(pub String);

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Keys recognized when a client is built from a mapping.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Id,
    Secret,
    RedirectUrl,
    Scope,
    Storage,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Secret,
        Field::RedirectUrl,
        Field::Scope,
        Field::Storage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Secret => "secret",
            Field::RedirectUrl => "redirectUrl",
            Field::Scope => "scope",
            Field::Storage => "storage",
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownField;

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or(UnknownField)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_case_sensitive() {
        assert_eq!("redirectUrl".parse::<Field>(), Ok(Field::RedirectUrl));
        assert_eq!("redirect_url".parse::<Field>(), Err(UnknownField));
        assert_eq!("ID".parse::<Field>(), Err(UnknownField));
    }

    #[test]
    fn every_field_parses_from_its_name() {
        for field in Field::ALL.iter() {
            assert_eq!(field.as_str().parse::<Field>(), Ok(*field));
        }
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = ClientSecret("hunter2".to_string());
        assert!(!format!("{:?}", secret).contains("hunter2"));
    }
}
