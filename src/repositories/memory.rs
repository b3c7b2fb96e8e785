//! In-memory reference implementation of the contact repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Contact;
use crate::repositories::ContactRepository;

/// Thread-safe in-memory contact store.
///
/// Stands in for the relational backing store in tests and embeddings;
/// cheap to clone, all clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryContactRepository {
    contacts: Arc<RwLock<HashMap<String, Contact>>>,
}

impl MemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, HashMap<String, Contact>>> {
        self.contacts
            .read()
            .map_err(|_| RepositoryError::Storage("repository lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Contact>>> {
        self.contacts
            .write()
            .map_err(|_| RepositoryError::Storage("repository lock poisoned".to_string()))
    }

    fn sorted_by_name(mut contacts: Vec<Contact>) -> Vec<Contact> {
        contacts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        contacts
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn create(&self, contact: &Contact) -> RepositoryResult<()> {
        let mut contacts = self.write()?;

        if contacts.contains_key(&contact.id) {
            return Err(RepositoryError::Duplicate(contact.id.clone()));
        }

        contacts.insert(contact.id.clone(), contact.clone());
        Ok(())
    }

    async fn update(&self, contact: &Contact) -> RepositoryResult<()> {
        let mut contacts = self.write()?;

        if !contacts.contains_key(&contact.id) {
            return Err(RepositoryError::Missing(contact.id.clone()));
        }

        contacts.insert(contact.id.clone(), contact.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Contact>> {
        let contacts = self.read()?;
        Ok(contacts.get(id).cloned())
    }

    async fn get_by_region_id(&self, region_id: &str) -> RepositoryResult<Vec<Contact>> {
        let contacts = self.read()?;

        let matches: Vec<Contact> = contacts
            .values()
            .filter(|c| c.region_id == region_id && !c.is_deleted)
            .cloned()
            .collect();

        Ok(Self::sorted_by_name(matches))
    }

    async fn list_page(&self, page_size: usize, page: usize) -> RepositoryResult<Vec<Contact>> {
        let contacts = self.read()?;

        let active: Vec<Contact> = contacts.values().filter(|c| !c.is_deleted).cloned().collect();

        Ok(Self::sorted_by_name(active)
            .into_iter()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .collect())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        let contacts = self.read()?;
        Ok(contacts.values().filter(|c| !c.is_deleted).count())
    }
}
