//! In-memory user registry.
//!
//! The store owns the user table, assigns identifiers, and enforces the
//! two business rules: registrations below the minimum age are refused,
//! and administrators cannot be deactivated.

use crate::config::ReportConfig;
use crate::report;
use crate::user::{User, UserStatus};
use thiserror::Error;

/// Minimum age accepted at registration.
pub const MINIMUM_AGE: u32 = 18;

/// A refused registry operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("O usuário deve ser maior de idade.")]
    Underage,
}

/// Sole owner of the user table.
///
/// Identifiers start at 1 and increase monotonically; they are never
/// reused, not even after `clear`.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a new user and return a copy of the stored record.
    ///
    /// Fails with [`RegistryError::Underage`] when `age` is below
    /// [`MINIMUM_AGE`]; nothing is stored in that case.
    pub fn create_user(
        &mut self,
        name: &str,
        email: &str,
        age: u32,
        is_admin: bool,
    ) -> Result<User, RegistryError> {
        if age < MINIMUM_AGE {
            return Err(RegistryError::Underage);
        }

        let user = User {
            id: self.next_id,
            name: name.to_string(),
            email: email.to_string(),
            age,
            is_admin,
            status: UserStatus::Active,
        };
        self.next_id += 1;
        self.users.push(user.clone());

        Ok(user)
    }

    /// Look up a user by identifier.
    pub fn get_user_by_id(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Deactivate a user.
    ///
    /// Returns whether the record is inactive afterwards: `true` for a
    /// known non-admin (already-inactive records stay inactive), `false`
    /// for an unknown id or an administrator. Administrators are never
    /// mutated.
    pub fn deactivate_user(&mut self, id: u64) -> bool {
        match self.users.iter_mut().find(|user| user.id == id) {
            Some(user) if user.is_admin => false,
            Some(user) => {
                user.status = UserStatus::Inactive;
                true
            }
            None => false,
        }
    }

    /// Render the plain-text report over the current table.
    #[allow(dead_code)] // Embedding API; the CLI renders via report::render
    pub fn generate_report(&self) -> String {
        report::render(&self.users, &ReportConfig::default())
    }

    /// All users in creation order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Empty the table and restart identifier assignment at 1.
    pub fn clear(&mut self) {
        self.users.clear();
        self.next_id = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> UserStore {
        let mut store = UserStore::new();
        store
            .create_user("Alice", "alice@email.com", 28, false)
            .unwrap();
        store
            .create_user("Bob", "bob@email.com", 32, false)
            .unwrap();
        store
    }

    #[test]
    fn test_create_user_assigns_id() {
        let mut store = UserStore::new();
        let created = store
            .create_user("Fulano de Tal", "fulano@teste.com", 25, false)
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.status, UserStatus::Active);
        assert!(!created.is_admin);
    }

    #[test]
    fn test_get_user_by_id_returns_stored_fields() {
        let mut store = UserStore::new();
        let created = store
            .create_user("Fulano de Tal", "fulano@teste.com", 25, false)
            .unwrap();

        let found = store.get_user_by_id(created.id).unwrap();

        assert_eq!(found.name, "Fulano de Tal");
        assert_eq!(found.email, "fulano@teste.com");
        assert_eq!(found.age, 25);
        assert_eq!(found.status, UserStatus::Active);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let store = sample_store();
        let ids: Vec<u64> = store.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_underage_user_is_rejected() {
        let mut store = UserStore::new();
        let err = store
            .create_user("Menor", "menor@email.com", 17, false)
            .unwrap_err();

        assert_eq!(err, RegistryError::Underage);
        assert_eq!(err.to_string(), "O usuário deve ser maior de idade.");
        assert!(store.is_empty());
    }

    #[test]
    fn test_minimum_age_is_inclusive() {
        let mut store = UserStore::new();
        let created = store
            .create_user("Recém-adulto", "novo@teste.com", MINIMUM_AGE, false)
            .unwrap();
        assert_eq!(store.get_user_by_id(created.id).unwrap().age, 18);
    }

    #[test]
    fn test_rejected_user_leaves_table_unchanged() {
        let mut store = sample_store();
        let before = store.len();

        store
            .create_user("Menor", "menor@email.com", 17, false)
            .unwrap_err();

        assert_eq!(store.len(), before);
        // The failed attempt must not consume an id either.
        let next = store.create_user("Carol", "carol@email.com", 40, false).unwrap();
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_deactivate_regular_user() {
        let mut store = UserStore::new();
        let user = store
            .create_user("Comum", "comum@teste.com", 30, false)
            .unwrap();

        assert!(store.deactivate_user(user.id));
        assert_eq!(
            store.get_user_by_id(user.id).unwrap().status,
            UserStatus::Inactive
        );
    }

    #[test]
    fn test_deactivate_admin_is_refused() {
        let mut store = UserStore::new();
        let admin = store
            .create_user("Admin", "admin@teste.com", 40, true)
            .unwrap();

        assert!(!store.deactivate_user(admin.id));
        assert_eq!(
            store.get_user_by_id(admin.id).unwrap().status,
            UserStatus::Active
        );
    }

    #[test]
    fn test_deactivate_unknown_id_returns_false() {
        let mut store = sample_store();
        assert!(!store.deactivate_user(999));
        assert!(store
            .users()
            .iter()
            .all(|u| u.status == UserStatus::Active));
    }

    #[test]
    fn test_deactivate_twice_is_idempotent() {
        let mut store = UserStore::new();
        let user = store
            .create_user("Comum", "comum@teste.com", 30, false)
            .unwrap();

        assert!(store.deactivate_user(user.id));
        assert!(store.deactivate_user(user.id));
        assert_eq!(
            store.get_user_by_id(user.id).unwrap().status,
            UserStatus::Inactive
        );
    }

    #[test]
    fn test_lookup_is_stable() {
        let mut store = UserStore::new();
        let created = store
            .create_user("Alice", "alice@email.com", 28, false)
            .unwrap();

        let first = store.get_user_by_id(created.id).cloned();
        let second = store.get_user_by_id(created.id).cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_resets_table_and_ids() {
        let mut store = sample_store();
        store.clear();

        assert!(store.is_empty());
        assert!(store.get_user_by_id(1).is_none());

        let recreated = store
            .create_user("Alice", "alice@email.com", 28, false)
            .unwrap();
        assert_eq!(recreated.id, 1);
    }
}
