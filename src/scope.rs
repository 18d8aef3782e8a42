//! Permission scopes a client may request from the platform.

/// A permission selection sent in the `scope` parameter of an
/// authorization request.
pub trait Scope: std::fmt::Debug + Send + Sync {
    fn as_str(&self) -> &str;
}

macro_rules! make_scope {
    ($(#[$meta: meta])* $name: ident, $value: expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl Scope for $name {
            fn as_str(&self) -> &str {
                $value
            }
        }
    };
}

make_scope!(
    /// Read-only access to public data. Used when no scope is supplied.
    ReadScope,
    "read"
);
make_scope!(ReadViewerScope, "read:viewer");
make_scope!(ReadUserScope, "read:user");
make_scope!(ReadChannelScope, "read:channel");
make_scope!(ChatScope, "chat");

pub fn names() -> [&'static str; 5] {
    ["read", "read:viewer", "read:user", "read:channel", "chat"]
}

pub fn from_name(name: &str) -> Option<Box<dyn Scope>> {
    let scope: Box<dyn Scope> = match name {
        "read" => Box::new(ReadScope),
        "read:viewer" => Box::new(ReadViewerScope),
        "read:user" => Box::new(ReadUserScope),
        "read:channel" => Box::new(ReadChannelScope),
        "chat" => Box::new(ChatScope),
        _ => return None,
    };
    Some(scope)
}
