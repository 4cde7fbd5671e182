use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::{watch, RwLock};
use uuid::Uuid;

use crate::common::AuthError;
use crate::store::DocumentStore;

use super::{Identity, IdentityProvider};

const MIN_PASSWORD_LEN: usize = 6;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();

fn engine() -> &'static Argon2<'static> {
    INSTANCE.get_or_init(|| {
        let params = Params::new(
            64 * 1024, // 64MB Memory (m)
            3,         // 3 Iterations (t)
            4,         // 4 Parallelism lanes (p)
            None,      // Default hash length (32 bytes)
        )
        .expect("Invalid Argon2 parameters");

        Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
    })
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = engine().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(stored_hash)?;

    match engine().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

struct StoredUser {
    uid: String,
    email: String,
    display_name: Option<String>,
    password_hash: String,
}

/// In-process identity provider with argon2-hashed credentials.
/// Accounts are keyed by lowercased email.
pub struct LocalProvider {
    users: RwLock<HashMap<String, StoredUser>>,
    state: watch::Sender<Option<Identity>>,
    profile_store: Option<Arc<dyn DocumentStore>>,
    admin_email: String,
}

impl LocalProvider {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            users: RwLock::new(HashMap::new()),
            state,
            profile_store: None,
            admin_email: String::new(),
        }
    }

    /// Mirrors each new account into the `users` collection, which
    /// feeds the home-page member count.
    pub fn with_profile_store(
        mut self,
        store: Arc<dyn DocumentStore>,
        admin_email: &str,
    ) -> Self {
        self.profile_store = Some(store);
        self.admin_email = admin_email.to_string();
        self
    }

    async fn write_profile(&self, identity: &Identity) {
        let Some(store) = &self.profile_store else {
            return;
        };

        let mut fields = Map::new();
        fields.insert("uid".to_string(), Value::String(identity.uid.clone()));
        fields.insert(
            "username".to_string(),
            Value::String(identity.display().to_string()),
        );
        fields.insert("email".to_string(), Value::String(identity.email.clone()));
        fields.insert(
            "is_admin".to_string(),
            Value::Bool(
                !self.admin_email.is_empty()
                    && identity.email.eq_ignore_ascii_case(&self.admin_email),
            ),
        );

        // Profile mirroring is best-effort; the account itself is
        // already created.
        if let Err(e) = store.add("users", fields).await {
            log::error!("Failed to write user profile for {}: {e}", identity.email);
        }
    }
}

impl Default for LocalProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for LocalProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let key = email.trim().to_lowercase();
        let users = self.users.read().await;

        // Always verify against some hash so missing accounts cost
        // the same as wrong passwords.
        let (user, stored_hash) = match users.get(&key) {
            Some(user) => (Some(user), user.password_hash.clone()),
            None => {
                let dummy = hash_password("dummy_password_for_timing")
                    .map_err(|e| AuthError::Backend(e.to_string()))?;
                (None, dummy)
            }
        };

        let password_valid = verify_password(password, &stored_hash)
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        let Some(user) = user.filter(|_| password_valid) else {
            return Err(AuthError::InvalidCredentials);
        };

        let identity = Identity {
            uid: user.uid.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
        };
        drop(users);

        self.state.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Identity, AuthError> {
        let email = email.trim().to_string();
        let key = email.to_lowercase();

        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
        }

        let password_hash =
            hash_password(password).map_err(|e| AuthError::Backend(e.to_string()))?;

        let display_name = Some(display_name.trim().to_string()).filter(|n| !n.is_empty());
        let identity = {
            let mut users = self.users.write().await;
            if users.contains_key(&key) {
                return Err(AuthError::EmailTaken(email));
            }

            let user = StoredUser {
                uid: Uuid::new_v4().to_string(),
                email: email.clone(),
                display_name: display_name.clone(),
                password_hash,
            };
            let identity = Identity {
                uid: user.uid.clone(),
                email: user.email.clone(),
                display_name: user.display_name.clone(),
            };
            users.insert(key, user);
            identity
        };

        self.write_profile(&identity).await;
        self.state.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.state.send_replace(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let key = email.trim().to_lowercase();
        let users = self.users.read().await;
        if !users.contains_key(&key) {
            return Err(AuthError::UnknownEmail(email.trim().to_string()));
        }

        // No mail transport here; the hook exists so embedders can
        // observe the request.
        log::info!("Password reset requested for {}", email.trim());
        Ok(())
    }

    fn watch(&self) -> watch::Receiver<Option<Identity>> {
        self.state.subscribe()
    }
}
