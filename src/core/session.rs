use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::StudieHubError;
use crate::model::user::{ADMIN_ROLE, AuthData, User, UserProfile};

/// Token and user as persisted between runs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Deserialize)]
struct JwtClaims {
    exp: Option<i64>,
}

pub struct SessionStore {
    path: Option<PathBuf>,
    session: Session,
}

impl SessionStore {
    /// Loads the session file. A missing or unreadable file means signed out.
    pub fn load(path: &Path) -> Self {
        let session = if path.exists() {
            match std::fs::File::open(path) {
                Ok(file) => serde_json::from_reader(BufReader::new(file)).unwrap_or_else(|err| {
                    log::warn!("Ignoring unreadable session file {}: {}", path.display(), err);
                    Session::default()
                }),
                Err(err) => {
                    log::warn!("Failed to open session file {}: {}", path.display(), err);
                    Session::default()
                }
            }
        } else {
            Session::default()
        };

        SessionStore {
            path: Some(path.to_path_buf()),
            session,
        }
    }

    /// A store that never touches the filesystem.
    pub fn in_memory(session: Session) -> Self {
        SessionStore { path: None, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn set(&mut self, auth: AuthData) -> Result<(), StudieHubError> {
        log::info!("Signed in as {}", auth.user.email);
        self.session = Session {
            token: Some(auth.token),
            user: Some(auth.user),
        };
        self.save()
    }

    pub fn clear(&mut self) -> Result<(), StudieHubError> {
        self.session = Session::default();
        match &self.path {
            Some(path) if path.exists() => {
                std::fs::remove_file(path)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Copies profile changes into the stored user.
    pub fn update_user(&mut self, profile: &UserProfile) -> Result<(), StudieHubError> {
        if let Some(user) = self.session.user.as_mut() {
            user.username = profile.username.clone();
            user.mobile_number = profile.mobile_number.clone();
            user.roles = profile.roles.clone();
            self.save()?;
        }
        Ok(())
    }

    pub fn is_authenticated(&mut self) -> bool {
        self.is_authenticated_at(chrono::Utc::now().timestamp())
    }

    /// Expired or malformed tokens clear the session.
    pub fn is_authenticated_at(&mut self, now: i64) -> bool {
        let Some(token) = self.session.token.as_deref() else {
            return false;
        };

        let valid = match token_expiry(token) {
            Some(Some(exp)) => exp >= now,
            Some(None) => true,
            None => false,
        };

        if !valid {
            log::info!("Stored token is expired or malformed, clearing session");
            if let Err(err) = self.clear() {
                log::warn!("Failed to clear session: {}", err);
            }
        }
        valid
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|u| u.has_role(ADMIN_ROLE))
    }

    pub fn require_authenticated(&mut self) -> Result<User, StudieHubError> {
        if !self.is_authenticated() {
            return Err(StudieHubError::new(
                "Not signed in. Run `studiehub login` first.",
            ));
        }
        self.current_user()
            .cloned()
            .ok_or_else(|| StudieHubError::new("Session has no user, please sign in again"))
    }

    pub fn require_admin(&mut self) -> Result<User, StudieHubError> {
        let user = self.require_authenticated()?;
        if !user.has_role(ADMIN_ROLE) {
            return Err(StudieHubError::new("This action requires an administrator account"));
        }
        Ok(user)
    }

    fn save(&self) -> Result<(), StudieHubError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.session)?;
        log::debug!("Session saved to {}", path.display());
        Ok(())
    }
}

/// `None` when the token is not a decodable JWT, otherwise its `exp` claim.
fn token_expiry(token: &str) -> Option<Option<i64>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: JwtClaims = serde_json::from_slice(&bytes).ok()?;
    Some(claims.exp)
}
