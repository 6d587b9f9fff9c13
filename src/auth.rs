//! Auth Collaborator Bindings
//!
//! Session, user, and sign-out access against the identity provider the host
//! page exposes at `window.authClient`. Token extraction is kept as pure
//! functions over deserialized session data so each supported shape can be
//! tested with plain fixtures.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "authClient"], js_name = fetchAuthSession, catch)]
    async fn fetch_auth_session() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "authClient"], js_name = fetchCurrentUser, catch)]
    async fn fetch_current_user() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "authClient"], js_name = signOut, catch)]
    async fn sign_out_js() -> Result<JsValue, JsValue>;
}

/// Auth session in either of the shapes the provider may hand back:
/// a legacy flat `idToken` string, or a structured `tokens.idToken`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthSession {
    #[serde(rename = "idToken")]
    pub id_token: Option<String>,
    pub tokens: Option<SessionTokens>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SessionTokens {
    #[serde(rename = "idToken")]
    pub id_token: Option<IdToken>,
}

/// The structured form carries the token either as a plain string or as an
/// object with a `jwtToken` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IdToken {
    Raw(String),
    Structured {
        #[serde(rename = "jwtToken")]
        jwt_token: Option<String>,
    },
}

impl IdToken {
    fn jwt(&self) -> Option<&str> {
        match self {
            IdToken::Structured { jwt_token } => jwt_token.as_deref(),
            IdToken::Raw(_) => None,
        }
    }

    fn raw(&self) -> Option<&str> {
        match self {
            IdToken::Raw(token) => Some(token),
            IdToken::Structured { .. } => None,
        }
    }
}

/// Try the known session shapes in order; first non-empty token wins.
pub fn extract_token(session: &AuthSession) -> Option<String> {
    let structured = session.tokens.as_ref().and_then(|t| t.id_token.as_ref());
    let candidates = [
        session.id_token.as_deref(),
        structured.and_then(IdToken::jwt),
        structured.and_then(IdToken::raw),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|token| !token.is_empty())
        .map(str::to_string)
}

/// Fetch the current session and pull a bearer token out of it.
///
/// Any failure (provider throw, unreadable session, no token) logs and
/// yields `None`; callers treat that as "cannot perform the request".
pub async fn auth_token() -> Option<String> {
    let session = match fetch_auth_session().await {
        Ok(value) => value,
        Err(err) => {
            web_sys::console::error_2(&"Error fetching auth session:".into(), &err);
            return None;
        }
    };
    let session: AuthSession = match serde_wasm_bindgen::from_value(session) {
        Ok(session) => session,
        Err(err) => {
            web_sys::console::warn_1(&format!("Unreadable auth session: {err}").into());
            return None;
        }
    };
    let token = extract_token(&session);
    if token.is_none() {
        web_sys::console::warn_1(&"No token found in auth session".into());
    }
    token
}

/// Current user in the shapes the provider may hand back.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CurrentUser {
    pub attributes: Option<UserAttributes>,
    #[serde(rename = "signInDetails")]
    pub sign_in_details: Option<SignInDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserAttributes {
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignInDetails {
    #[serde(rename = "loginId")]
    pub login_id: Option<String>,
}

/// Prefer the email attribute, else the login id's local part, else "Unknown".
pub fn display_name(user: &CurrentUser) -> String {
    if let Some(email) = user.attributes.as_ref().and_then(|a| a.email.as_deref()) {
        if !email.is_empty() {
            return email.to_string();
        }
    }
    if let Some(login) = user.sign_in_details.as_ref().and_then(|d| d.login_id.as_deref()) {
        if !login.is_empty() {
            return login.split('@').next().unwrap_or(login).to_string();
        }
    }
    "Unknown".to_string()
}

/// Resolve the display name for the current user, "Unknown" on any failure.
pub async fn current_user_name() -> String {
    let user = match fetch_current_user().await {
        Ok(value) => value,
        Err(err) => {
            web_sys::console::error_2(&"Error retrieving current user:".into(), &err);
            return "Unknown".to_string();
        }
    };
    match serde_wasm_bindgen::from_value::<CurrentUser>(user) {
        Ok(user) => display_name(&user),
        Err(err) => {
            web_sys::console::warn_1(&format!("Unreadable current user: {err}").into());
            "Unknown".to_string()
        }
    }
}

/// Sign out through the provider, then force a full reload to discard all
/// client state. A failed sign-out logs and skips the reload.
pub async fn sign_out_and_reload() {
    if let Err(err) = sign_out_js().await {
        web_sys::console::error_2(&"Error signing out:".into(), &err);
        return;
    }
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            web_sys::console::error_2(&"Error reloading page:".into(), &err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(value: serde_json::Value) -> AuthSession {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_legacy_flat_token() {
        let s = session(json!({ "idToken": "legacy-token" }));
        assert_eq!(extract_token(&s).as_deref(), Some("legacy-token"));
    }

    #[test]
    fn test_structured_jwt_token() {
        let s = session(json!({ "tokens": { "idToken": { "jwtToken": "jwt-token" } } }));
        assert_eq!(extract_token(&s).as_deref(), Some("jwt-token"));
    }

    #[test]
    fn test_structured_string_token() {
        let s = session(json!({ "tokens": { "idToken": "string-token" } }));
        assert_eq!(extract_token(&s).as_deref(), Some("string-token"));
    }

    #[test]
    fn test_legacy_shape_wins_over_structured() {
        let s = session(json!({
            "idToken": "legacy-token",
            "tokens": { "idToken": { "jwtToken": "jwt-token" } },
        }));
        assert_eq!(extract_token(&s).as_deref(), Some("legacy-token"));
    }

    #[test]
    fn test_empty_strings_never_win() {
        let s = session(json!({
            "idToken": "",
            "tokens": { "idToken": { "jwtToken": "jwt-token" } },
        }));
        assert_eq!(extract_token(&s).as_deref(), Some("jwt-token"));

        let s = session(json!({ "idToken": "", "tokens": { "idToken": "" } }));
        assert_eq!(extract_token(&s), None);
    }

    #[test]
    fn test_shapeless_session_yields_none() {
        assert_eq!(extract_token(&session(json!({}))), None);
        assert_eq!(extract_token(&session(json!({ "tokens": {} }))), None);
    }

    fn user(value: serde_json::Value) -> CurrentUser {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_display_name_prefers_email() {
        let u = user(json!({
            "attributes": { "email": "ada@example.com" },
            "signInDetails": { "loginId": "fallback@example.com" },
        }));
        assert_eq!(display_name(&u), "ada@example.com");
    }

    #[test]
    fn test_display_name_falls_back_to_login_local_part() {
        let u = user(json!({ "signInDetails": { "loginId": "ada@example.com" } }));
        assert_eq!(display_name(&u), "ada");

        // Login id without a domain is used as-is.
        let u = user(json!({ "signInDetails": { "loginId": "ada" } }));
        assert_eq!(display_name(&u), "ada");
    }

    #[test]
    fn test_display_name_unknown_when_nothing_usable() {
        assert_eq!(display_name(&user(json!({}))), "Unknown");
        let u = user(json!({ "attributes": { "email": "" }, "signInDetails": { "loginId": "" } }));
        assert_eq!(display_name(&u), "Unknown");
    }
}
