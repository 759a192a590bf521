// Factory Pattern: plain functions that build and return new values.
// No constructors, no `new` keyword magic; any fn returning a struct qualifies.

use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Unknown user kind '{0}' (expected guest, member or admin)")]
    UnknownKind(String),
}

// ============================================================================
// Example: Tagged variants instead of magic-number type switches
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Guest,
    #[default]
    Member,
    Admin,
}

impl UserKind {
    pub fn permissions(self) -> &'static [&'static str] {
        match self {
            UserKind::Guest => &["read"],
            UserKind::Member => &["read", "write"],
            UserKind::Admin => &["read", "write", "manage_users"],
        }
    }
}

impl FromStr for UserKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(UserKind::Guest),
            "member" => Ok(UserKind::Member),
            "admin" => Ok(UserKind::Admin),
            _ => Err(FactoryError::UnknownKind(s.to_string())),
        }
    }
}

// ============================================================================
// Example: Factory function with destructured, defaulted parameters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub user_name: String,
    pub id: u64,
    pub avatar: String,
    pub kind: UserKind,
}

/// Named arguments for [`create_user`]. Fill only what you need and take the
/// rest from `..Default::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserParams {
    pub user_name: String,
    pub id: u64,
    pub avatar: String,
    pub kind: UserKind,
}

impl Default for UserParams {
    fn default() -> Self {
        Self {
            user_name: "anonymous".to_string(),
            id: 0,
            avatar: "default.png".to_string(),
            kind: UserKind::default(),
        }
    }
}

pub fn create_user(
    UserParams {
        user_name,
        id,
        avatar,
        kind,
    }: UserParams,
) -> User {
    User {
        user_name,
        id,
        avatar,
        kind,
    }
}

/// Parses the kind tag first so a bad tag never produces a half-built user.
pub fn create_user_of_kind(tag: &str, params: UserParams) -> Result<User, FactoryError> {
    let kind = tag.parse()?;
    Ok(create_user(UserParams { kind, ..params }))
}

impl User {
    pub fn set_user_name(&mut self, user_name: impl Into<String>) -> &mut Self {
        self.user_name = user_name.into();
        self
    }
}

// ============================================================================
// Example: Closures capture their environment
// ============================================================================

pub fn greeter(prefix: impl Into<String>) -> impl Fn(&User) -> String {
    let prefix = prefix.into();
    move |user| format!("{}, {}!", prefix, user.user_name)
}

// ============================================================================
// Tests
// ============================================================================
