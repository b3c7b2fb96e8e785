use async_trait::async_trait;

use crate::error::RepositoryResult;
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (relational, in-memory, mock). `list_page`,
/// `count`, and `get_by_region_id` operate over non-deleted records only,
/// ordered by name — the filter is part of the contract, not a parameter.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact.
    async fn create(&self, contact: &Contact) -> RepositoryResult<()>;

    /// Overwrite the stored record matching `contact.id`.
    async fn update(&self, contact: &Contact) -> RepositoryResult<()>;

    /// Retrieve a single contact by ID, including soft-deleted records.
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Contact>>;

    /// Retrieve the non-deleted contacts belonging to a region.
    async fn get_by_region_id(&self, region_id: &str) -> RepositoryResult<Vec<Contact>>;

    /// Retrieve one page of non-deleted contacts. `page` is zero-based.
    async fn list_page(&self, page_size: usize, page: usize) -> RepositoryResult<Vec<Contact>>;

    /// Count the non-deleted contacts.
    async fn count(&self) -> RepositoryResult<usize>;
}
