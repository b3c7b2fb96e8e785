use async_trait::async_trait;
use contact_service::error::RepositoryResult;
use contact_service::models::Contact;
use contact_service::repositories::ContactRepository;
use contact_service::MemoryContactRepository;
use std::collections::HashMap;
use std::sync::Mutex;

/// Call-counting wrapper around the in-memory repository.
///
/// Delegates every operation to a real [`MemoryContactRepository`] and tracks
/// per-method call counts so tests can assert how often the orchestrator
/// reached local persistence.
#[allow(dead_code)]
pub struct CountingRepository {
    inner: MemoryContactRepository,
    calls: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl CountingRepository {
    pub fn new() -> Self {
        Self {
            inner: MemoryContactRepository::new(),
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Insert a record directly, bypassing the counters.
    pub async fn seed(&self, contact: Contact) {
        self.inner.create(&contact).await.unwrap();
    }

    /// Read a record directly, bypassing the counters.
    pub async fn stored(&self, id: &str) -> Option<Contact> {
        self.inner.get_by_id(id).await.unwrap()
    }

    /// Number of times a method was called through the trait.
    pub fn call_count(&self, method: &str) -> usize {
        let calls = self.calls.lock().unwrap();
        *calls.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut calls = self.calls.lock().unwrap();
        *calls.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for CountingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for CountingRepository {
    async fn create(&self, contact: &Contact) -> RepositoryResult<()> {
        self.track_call("create");
        self.inner.create(contact).await
    }

    async fn update(&self, contact: &Contact) -> RepositoryResult<()> {
        self.track_call("update");
        self.inner.update(contact).await
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Contact>> {
        self.track_call("get_by_id");
        self.inner.get_by_id(id).await
    }

    async fn get_by_region_id(&self, region_id: &str) -> RepositoryResult<Vec<Contact>> {
        self.track_call("get_by_region_id");
        self.inner.get_by_region_id(region_id).await
    }

    async fn list_page(&self, page_size: usize, page: usize) -> RepositoryResult<Vec<Contact>> {
        self.track_call("list_page");
        self.inner.list_page(page_size, page).await
    }

    async fn count(&self) -> RepositoryResult<usize> {
        self.track_call("count");
        self.inner.count().await
    }
}
