use parking_lot::RwLock;

use crate::domain::directory::{Classification, CompanyAggregate, UserRecord};

use super::seed::SeedData;

// ============================================================================
// Record Store - In-memory users + company aggregate
// ============================================================================
//
// Users and the company live behind ONE lock. Single-entity reads take the
// read side and return clones; `transaction` takes the write side for the
// whole closure, so a user write and its paired company write are never
// observed apart.
//
// ============================================================================

struct Tables {
    users: Vec<UserRecord>,
    company: CompanyAggregate,
}

impl Tables {
    fn get_user(&self, id: &str) -> Option<UserRecord> {
        if id.is_empty() {
            return None;
        }
        self.users.iter().find(|u| u.id().as_str() == id).cloned()
    }

    fn upsert_user(&mut self, record: UserRecord) {
        if record.id().is_empty() {
            tracing::warn!("Ignoring user write without an id");
            return;
        }

        match self.users.iter_mut().find(|u| u.id() == record.id()) {
            Some(slot) => {
                tracing::debug!(user_id = %record.id(), "Replacing user record");
                *slot = record;
            }
            None => {
                tracing::debug!(user_id = %record.id(), "Inserting new user record");
                self.users.push(record);
            }
        }
    }
}

pub struct RecordStore {
    tables: RwLock<Tables>,
}

impl RecordStore {
    pub fn new(users: Vec<UserRecord>, company: CompanyAggregate) -> Self {
        let mut tables = Tables {
            users: Vec::with_capacity(users.len()),
            company,
        };
        for user in users {
            tables.upsert_user(user);
        }
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub fn from_seed(seed: SeedData) -> Self {
        Self::new(seed.users, seed.company)
    }

    /// Copy of the user with `id`; `None` for an unknown or empty id.
    pub fn get_user(&self, id: &str) -> Option<UserRecord> {
        self.tables.read().get_user(id)
    }

    /// Replace the user with the same id, or append it as new.
    /// Records with an empty id are dropped.
    pub fn upsert_user(&self, record: UserRecord) {
        self.tables.write().upsert_user(record);
    }

    pub fn get_company(&self) -> CompanyAggregate {
        self.tables.read().company.clone()
    }

    pub fn save_company(&self, company: CompanyAggregate) {
        self.tables.write().company = company;
    }

    /// Deep copy of every user, in insertion order.
    pub fn list_users(&self) -> Vec<UserRecord> {
        self.tables.read().users.clone()
    }

    /// Number of users currently classified as employees.
    pub fn employee_tally(&self) -> usize {
        self.tables
            .read()
            .users
            .iter()
            .filter(|u| u.classification() == Classification::Employee)
            .count()
    }

    /// Run `f` while holding the write lock over users and company.
    pub fn transaction<T>(&self, f: impl FnOnce(&mut StoreTxn<'_>) -> T) -> T {
        let mut guard = self.tables.write();
        let mut txn = StoreTxn { tables: &mut *guard };
        f(&mut txn)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::from_seed(SeedData::default())
    }
}

/// Read/write view handed to [`RecordStore::transaction`]
pub struct StoreTxn<'a> {
    tables: &'a mut Tables,
}

impl StoreTxn<'_> {
    pub fn get_user(&self, id: &str) -> Option<UserRecord> {
        self.tables.get_user(id)
    }

    pub fn upsert_user(&mut self, record: UserRecord) {
        self.tables.upsert_user(record);
    }

    pub fn get_company(&self) -> CompanyAggregate {
        self.tables.company.clone()
    }

    pub fn save_company(&mut self, company: CompanyAggregate) {
        self.tables.company = company;
    }
}
