use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Decides whether a login attempt is allowed.
pub trait AuthVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Single fixed account, for local development.
pub struct StaticCredentials {
    email: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl AuthVerifier for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> bool {
        !self.email.is_empty() && email == self.email && password == self.password
    }
}

/// How long a login token stays valid.
pub const SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Bearer tokens issued at login, with their issue time. Held in memory only.
/// Expired tokens are rejected and pruned on the next login.
pub struct SessionRegistry {
    ttl: Duration,
    tokens: Mutex<HashMap<String, Instant>>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            tokens: Mutex::new(HashMap::new()),
        }
    }

    pub fn issue(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        let mut tokens = self.lock();
        let ttl = self.ttl;
        tokens.retain(|_, issued| issued.elapsed() < ttl);
        tokens.insert(token.clone(), Instant::now());
        token
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.lock()
            .get(token)
            .is_some_and(|issued| issued.elapsed() < self.ttl)
    }

    pub fn revoke(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Instant>> {
        self.tokens.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials() {
        let verifier =
            StaticCredentials::new("test@example.com".to_string(), "password123".to_string());
        assert!(verifier.verify("test@example.com", "password123"));
        assert!(!verifier.verify("test@example.com", "password"));
        assert!(!verifier.verify("admin@example.com", "password123"));
    }

    #[test]
    fn test_empty_email_never_verifies() {
        let verifier = StaticCredentials::new(String::new(), String::new());
        assert!(!verifier.verify("", ""));
    }

    #[test]
    fn test_session_lifecycle() {
        let sessions = SessionRegistry::new();
        let token = sessions.issue();
        assert!(sessions.is_valid(&token));
        assert!(!sessions.is_valid("made-up"));
        assert!(sessions.revoke(&token));
        assert!(!sessions.is_valid(&token));
        assert!(!sessions.revoke(&token));
    }

    #[test]
    fn test_expired_tokens_are_rejected_and_pruned() {
        let sessions = SessionRegistry::with_ttl(Duration::from_millis(20));
        let stale = sessions.issue();
        assert!(sessions.is_valid(&stale));

        std::thread::sleep(Duration::from_millis(40));
        assert!(!sessions.is_valid(&stale));

        let fresh = sessions.issue();
        assert!(sessions.is_valid(&fresh));
        let tokens = sessions.lock();
        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains_key(&fresh));
    }
}
