//! Static route classification.
//!
//! Paths fall into three classes: public, protected, and admin-only.
//! Classification is prefix-based against two configured lists; anything
//! matching neither list is public. Admin-only paths are a subset of the
//! protected set by construction, so an admin-only path always also
//! requires a valid session. The lists are configuration data, evaluated
//! independently, and declaration order carries no meaning.

/// Classification of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without a session.
    Public,
    /// Requires a valid session.
    Protected,
    /// Requires a valid session plus a specific role. Implies protected.
    AdminOnly,
}

/// Static mapping from request path to [`RouteClass`].
#[derive(Debug, Clone)]
pub struct RouteTable {
    protected: Vec<String>,
    admin_only: Vec<String>,
}

impl RouteTable {
    /// Creates a route table from protected and admin-only path prefixes.
    ///
    /// Admin-only prefixes need not be repeated in the protected list;
    /// they are treated as protected regardless.
    #[must_use]
    pub fn new(protected: Vec<String>, admin_only: Vec<String>) -> Self {
        Self {
            protected,
            admin_only,
        }
    }

    /// Classifies a path.
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.is_admin_only(path) {
            RouteClass::AdminOnly
        } else if self.matches_protected(path) {
            RouteClass::Protected
        } else {
            RouteClass::Public
        }
    }

    /// Returns true if the path requires no session.
    #[must_use]
    pub fn is_public(&self, path: &str) -> bool {
        !self.is_protected(path)
    }

    /// Returns true if the path requires a valid session.
    ///
    /// Admin-only paths are included: the role check applies on top of the
    /// session check, not instead of it.
    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        self.matches_protected(path) || self.is_admin_only(path)
    }

    /// Returns true if the path additionally requires the admin role.
    #[must_use]
    pub fn is_admin_only(&self, path: &str) -> bool {
        Self::matches_any(&self.admin_only, path)
    }

    fn matches_protected(&self, path: &str) -> bool {
        Self::matches_any(&self.protected, path)
    }

    fn matches_any(prefixes: &[String], path: &str) -> bool {
        prefixes.iter().any(|prefix| path.starts_with(prefix))
    }
}
