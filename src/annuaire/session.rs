//! Session-wide administrator flag.
//!
//! This is a demonstration gate, not a security boundary: the shared secret
//! is a constant compiled into the binary, and anyone holding the binary can
//! read it. It only decides which operations the running session exposes.
//! The flag starts cleared and is never persisted; a new process is a new
//! session.

const ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Default)]
pub struct Session {
    is_admin: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Exact, case-sensitive comparison against the shared secret. A failed
    /// attempt leaves the session untouched; there is no lockout.
    pub fn login(&mut self, password: &str) -> bool {
        if password == ADMIN_PASSWORD {
            self.is_admin = true;
            true
        } else {
            false
        }
    }

    pub fn logout(&mut self) {
        self.is_admin = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_admin_rights() {
        assert!(!Session::new().is_admin());
    }

    #[test]
    fn wrong_password_changes_nothing() {
        let mut session = Session::new();
        assert!(!session.login("wrong"));
        assert!(!session.is_admin());
    }

    #[test]
    fn password_is_case_sensitive() {
        let mut session = Session::new();
        assert!(!session.login("Admin"));
        assert!(!session.is_admin());
    }

    #[test]
    fn full_login_logout_cycle() {
        let mut session = Session::new();
        assert!(!session.login("wrong"));
        assert!(!session.is_admin());

        assert!(session.login("admin"));
        assert!(session.is_admin());

        session.logout();
        assert!(!session.is_admin());
    }

    #[test]
    fn logout_is_unconditional() {
        let mut session = Session::new();
        session.logout();
        assert!(!session.is_admin());
    }
}
