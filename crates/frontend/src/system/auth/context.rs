use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::storage;

// Hard-coded demo account. This is not a security boundary; the session
// token is an opaque constant the rest of the app treats as proof of login.
const VALID_USERNAME: &str = "admin";
const VALID_PASSWORD: &str = "password";
const SESSION_TOKEN: &str = "mock-jwt-token";

/// Simulated round-trip for the login button spinner
const LOGIN_DELAY_MS: u32 = 1_000;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component.
///
/// Initial state comes from the stored token: presence means the session is
/// still considered valid. There is no server to re-validate against.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Check submitted credentials against the built-in account. Returns the
/// session token on success, the inline form message on failure.
pub fn check_credentials(username: &str, password: &str) -> Result<String, String> {
    if username == VALID_USERNAME && password == VALID_PASSWORD {
        Ok(SESSION_TOKEN.to_string())
    } else {
        Err("Invalid username or password. (Hint: admin/password)".to_string())
    }
}

/// Perform login: Anonymous -> Authenticated on a successful credential
/// check. Stores the token and flips the auth signal; the route layer reacts
/// by fetching the catalog.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    TimeoutFuture::new(LOGIN_DELAY_MS).await;

    let token = check_credentials(&username, &password)?;
    storage::save_token(&token);
    set_auth_state.set(AuthState { token: Some(token) });
    Ok(())
}

/// Perform logout: Authenticated -> Anonymous. Drops the stored token and
/// the in-memory auth state. Persisted products stay in localStorage; the
/// route layer clears the in-memory list when the signal flips.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_credentials_yield_token() {
        assert_eq!(
            check_credentials("admin", "password").unwrap(),
            "mock-jwt-token"
        );
    }

    #[test]
    fn wrong_credentials_yield_inline_message() {
        let err = check_credentials("admin", "hunter2").unwrap_err();
        assert_eq!(err, "Invalid username or password. (Hint: admin/password)");
        assert!(check_credentials("root", "password").is_err());
        assert!(check_credentials("", "").is_err());
    }

    #[test]
    fn auth_state_reflects_token_presence() {
        assert!(!AuthState::default().is_authenticated());
        assert!(AuthState {
            token: Some("mock-jwt-token".into())
        }
        .is_authenticated());
    }
}
