//! Access policy: path prefixes to authentication requirements
//!
//! `classify` turns a path into a [`PathClass`]; `check` combines a class with
//! an [`AuthResult`] into an [`Access`] verdict. Both the redirecting page gate
//! and the JSON-reporting API extractors are thin adapters over `check`.

use crate::claims::Role;
use crate::verifier::AuthResult;

/// Where unauthenticated page requests are sent
pub const LOGIN_PATH: &str = "/login";

/// Landing route for authenticated principals, regardless of role
pub const HOME_PATH: &str = "/profile";

/// Requirements that apply to a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathClass {
    /// Any authenticated principal may enter
    pub is_protected: bool,
    /// Login/signup pages, unreachable once authenticated
    pub is_public: bool,
    /// Narrower than `is_protected`: only this role may enter
    pub required_role: Option<Role>,
}

impl PathClass {
    /// Requires some authenticated principal
    pub const AUTHENTICATED: PathClass = PathClass {
        is_protected: true,
        is_public: false,
        required_role: None,
    };

    /// Requires an authenticated principal holding `role`
    pub const fn role(role: Role) -> Self {
        PathClass {
            is_protected: true,
            is_public: false,
            required_role: Some(role),
        }
    }
}

/// Verdict of the shared classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Protected path, no valid session
    LoginRequired,
    /// Public (login/signup) path, session already valid
    AlreadySignedIn,
    /// Role-restricted path, principal lacks the role
    RoleMismatch { required: Role },
}

/// Declarative table of path prefixes.
///
/// Matching is plain `starts_with`; `/admin` therefore also covers `/administrator`.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    pub protected_prefixes: Vec<String>,
    pub public_prefixes: Vec<String>,
    /// Evaluated in order; the first matching prefix decides the role
    pub role_rules: Vec<(String, Role)>,
    /// Paths the page gate never sees (API routes, assets)
    pub excluded_prefixes: Vec<String>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        fn owned(prefixes: &[&str]) -> Vec<String> {
            prefixes.iter().map(|p| p.to_string()).collect()
        }

        Self {
            protected_prefixes: owned(&["/dashboard", "/admin", "/worker", "/profile", "/shop-admin"]),
            public_prefixes: owned(&["/login", "/signup"]),
            role_rules: vec![
                ("/admin".to_string(), Role::Admin),
                ("/shop-admin".to_string(), Role::ShopAdmin),
            ],
            excluded_prefixes: owned(&["/api", "/static", "/assets", "/favicon.ico", "/health"]),
        }
    }
}

impl AccessPolicy {
    pub fn classify(&self, path: &str) -> PathClass {
        PathClass {
            is_protected: matches_any(&self.protected_prefixes, path),
            is_public: matches_any(&self.public_prefixes, path),
            required_role: self
                .role_rules
                .iter()
                .find(|(prefix, _)| path.starts_with(prefix.as_str()))
                .map(|(_, role)| *role),
        }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        matches_any(&self.excluded_prefixes, path)
    }
}

fn matches_any(prefixes: &[String], path: &str) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

/// Classify a request. First matching rule wins:
/// login requirement, then redirect-away from public pages, then role.
pub fn check(class: PathClass, auth: &AuthResult) -> Access {
    let authenticated = auth.is_authenticated();

    if class.is_protected && !authenticated {
        return Access::LoginRequired;
    }

    if class.is_public && authenticated {
        return Access::AlreadySignedIn;
    }

    match class.required_role {
        Some(required) if auth.role() != Some(required) => Access::RoleMismatch { required },
        _ => Access::Granted,
    }
}
