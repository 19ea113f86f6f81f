//! Mock session gate: fixed-credential authentication and lock state.
//!
//! DESIGN
//! ======
//! The credential check sits behind the `Authenticator` trait so a real
//! identity backend can replace the demo pair without touching view logic.
//! `SessionState` stays `Unlocked` for the process lifetime once a login
//! succeeds; the demo has no logout transition.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use thiserror::Error;

/// An unlocked session for one employee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub employee_no: String,
}

/// Login failure classes. The `Display` text is what the login form shows.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// One or both fields were blank after trimming.
    #[error("사번과 비밀번호를 입력해 주세요.")]
    EmptyFields,
    /// Both fields were filled but did not match the accepted pair.
    #[error("로그인 정보가 올바르지 않습니다.")]
    InvalidCredentials,
}

/// Pluggable credential check.
pub trait Authenticator {
    /// Validate one (identifier, secret) attempt.
    ///
    /// # Errors
    ///
    /// `AuthError::EmptyFields` when either trimmed field is blank,
    /// `AuthError::InvalidCredentials` on a mismatch.
    fn authenticate(&self, identifier: &str, secret: &str) -> Result<Session, AuthError>;
}

/// Demo authenticator accepting a single hard-coded pair.
#[derive(Clone, Debug)]
pub struct FixedCredentials {
    identifier: &'static str,
    secret: &'static str,
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self { identifier: "1111", secret: "1111" }
    }
}

impl Authenticator for FixedCredentials {
    fn authenticate(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        let identifier = identifier.trim();
        let secret = secret.trim();
        if identifier.is_empty() || secret.is_empty() {
            return Err(AuthError::EmptyFields);
        }
        if identifier == self.identifier && secret == self.secret {
            Ok(Session { employee_no: identifier.to_owned() })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Gate state for the splash/login surface. `session` present means
/// unlocked; `message` holds the last failure text for display.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub message: String,
}

impl SessionState {
    pub fn unlocked(&self) -> bool {
        self.session.is_some()
    }

    /// Run one login attempt and record the outcome. Returns `true` on the
    /// Locked → Unlocked transition. A failed attempt never re-locks.
    pub fn attempt_login(
        &mut self,
        auth: &impl Authenticator,
        identifier: &str,
        secret: &str,
    ) -> bool {
        match auth.authenticate(identifier, secret) {
            Ok(session) => {
                self.session = Some(session);
                self.message.clear();
                true
            }
            Err(err) => {
                self.message = err.to_string();
                false
            }
        }
    }
}
