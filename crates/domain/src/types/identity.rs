//! Identity of the user behind an access token

use serde::Serialize;
use serde_json::Value;

use super::id_string;

/// Stable identity extracted from the current-user profile.
///
/// `id` is the primary key upstream (e.g. `_12345_1`) and is the value to key
/// per-user state on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub user_name: Option<String>,
}

impl UserIdentity {
    /// Build an identity from a `users/me` profile body.
    ///
    /// The display name is `"<given> <family>"`, falling back to `userName`
    /// when both name parts are empty.
    pub fn from_profile(profile: &Value) -> Self {
        let str_at =
            |pointer: &str| profile.pointer(pointer).and_then(Value::as_str).map(str::to_string);

        let user_name = str_at("/userName");
        let given = str_at("/name/given").unwrap_or_default();
        let family = str_at("/name/family").unwrap_or_default();
        let full_name = format!("{given} {family}").trim().to_string();
        let display_name = if full_name.is_empty() { user_name.clone() } else { Some(full_name) };

        Self {
            id: profile.get("id").and_then(id_string),
            display_name,
            email: str_at("/contact/email"),
            user_name,
        }
    }
}
