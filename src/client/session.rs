//! Session state for the client.
//!
//! The session provider is initialized from persisted credential evidence
//! at application start, mutated on login/logout, and read by the
//! navigation guard through the [`SessionState`] trait. The client runs
//! single-threaded and cooperative, so reads during a transition always
//! observe a consistent value.

/// Read-only view of the client session consulted by the navigation guard.
pub trait SessionState {
    /// Whether the current session holds login evidence
    fn is_logged_in(&self) -> bool;
}

/// Persisted credential storage backing the session state.
pub trait CredentialStore {
    /// Read the persisted credential, if any
    fn load(&self) -> Option<String>;
    /// Persist a credential
    fn store(&mut self, token: String);
    /// Remove the persisted credential
    fn clear(&mut self);
}

/// Session truth for the client process.
///
/// Injected into the guard as a [`SessionState`] snapshot rather than read
/// through hidden global state.
pub struct SessionProvider<S: CredentialStore> {
    store: S,
    token: Option<String>,
}

impl<S: CredentialStore> SessionProvider<S> {
    /// Initialize the session from the credential persisted in the store
    pub fn new(store: S) -> Self {
        let token = store.load();

        Self { store, token }
    }

    /// Record a successful login, persisting the credential
    pub fn login(&mut self, token: String) {
        self.store.store(token.clone());
        self.token = Some(token);
    }

    /// Clear the session and the persisted credential
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
    }
}

impl<S: CredentialStore> SessionState for SessionProvider<S> {
    fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// In-memory credential store, used where no persistent storage is wired
/// in (and throughout the tests).
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Option<String>,
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn store(&mut self, token: String) {
        self.token = Some(token);
    }

    fn clear(&mut self) {
        self.token = None;
    }
}
