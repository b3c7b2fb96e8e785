//! Contact workflows: the orchestration layer over region lookup, the
//! cache-aside reader, local persistence, and event publication.

use async_trait::async_trait;
use std::sync::Arc;

use crate::cache::CacheAside;
use crate::error::{ServiceError, ServiceResult};
use crate::messaging::EventPublisher;
use crate::models::{Contact, ContactCreatedEvent};
use crate::repositories::ContactRepository;
use crate::services::RegionLookup;

/// Public contract of the contact workflows.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate the region reference and announce the new contact.
    ///
    /// Durability is delegated to the consumer of the published event; this
    /// path performs no local write.
    async fn create(&self, contact: Contact) -> ServiceResult<()>;

    /// Fetch a contact by id through the cache.
    async fn get_by_id(&self, id: &str) -> ServiceResult<Contact>;

    /// Resolve an area code to a region, then fetch that region's contacts
    /// through the cache.
    async fn get_by_area_code(&self, area_code: &str) -> ServiceResult<Vec<Contact>>;

    /// Re-validate the region reference and overwrite the stored record.
    async fn update(&self, contact: Contact) -> ServiceResult<()>;

    /// Soft-delete a contact.
    async fn remove_by_id(&self, id: &str) -> ServiceResult<()>;

    /// One page of non-deleted contacts, ordered by name. `page` is zero-based.
    async fn list_page(&self, page_size: usize, page: usize) -> ServiceResult<Vec<Contact>>;

    /// Number of non-deleted contacts.
    async fn count(&self) -> ServiceResult<usize>;
}

/// Default implementation of [`ContactService`].
///
/// A pure translation layer: remote failures are classified and partially
/// absorbed by the invoker below, absence of a result becomes one of the two
/// not-found kinds here, and everything else passes through unchanged — no
/// extra retries, no logging-and-rethrow.
///
/// Write paths do not invalidate cache entries: reads of an updated or
/// deleted contact may be served stale until the entry's TTL expires.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    cache: CacheAside,
    regions: RegionLookup,
    publisher: EventPublisher,
    create_channel: String,
    ignore_delivery_failure: bool,
}

impl ContactServiceImpl {
    /// Create the orchestrator with the default fire-and-forget delivery
    /// policy: a failed publish is logged and otherwise ignored.
    pub fn new(
        repository: Arc<dyn ContactRepository>,
        cache: CacheAside,
        regions: RegionLookup,
        publisher: EventPublisher,
        create_channel: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            cache,
            regions,
            publisher,
            create_channel: create_channel.into(),
            ignore_delivery_failure: true,
        }
    }

    /// Fail the create workflow when the created event cannot be delivered,
    /// instead of the default fire-and-forget handling.
    pub fn with_strict_delivery(mut self) -> Self {
        self.ignore_delivery_failure = false;
        self
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create(&self, contact: Contact) -> ServiceResult<()> {
        self.regions.get_by_id(&contact.region_id).await?;

        let event = ContactCreatedEvent::from_contact(&contact);
        let delivered = self
            .publisher
            .publish(&self.create_channel, Some(&event))
            .await;

        if !delivered {
            if self.ignore_delivery_failure {
                tracing::warn!(
                    contact = %contact.id,
                    channel = %self.create_channel,
                    "contact-created event was not delivered"
                );
            } else {
                return Err(ServiceError::EventDeliveryFailed);
            }
        }

        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> ServiceResult<Contact> {
        let repository = self.repository.clone();
        let lookup_id = id.to_string();

        let contact: Option<Contact> = self
            .cache
            .get_or_compute(id, || async move {
                repository
                    .get_by_id(&lookup_id)
                    .await
                    .map_err(ServiceError::from)
            })
            .await?;

        contact.ok_or(ServiceError::ContactNotFound)
    }

    async fn get_by_area_code(&self, area_code: &str) -> ServiceResult<Vec<Contact>> {
        let region = self.regions.get_by_area_code(area_code).await?;

        let repository = self.repository.clone();
        self.cache
            .get_or_compute(area_code, || async move {
                repository
                    .get_by_region_id(&region.id)
                    .await
                    .map_err(ServiceError::from)
            })
            .await
    }

    async fn update(&self, contact: Contact) -> ServiceResult<()> {
        let mut stored = self
            .repository
            .get_by_id(&contact.id)
            .await?
            .ok_or(ServiceError::ContactNotFound)?;

        self.regions.get_by_id(&contact.region_id).await?;

        stored.apply_update(&contact);
        self.repository.update(&stored).await?;

        Ok(())
    }

    async fn remove_by_id(&self, id: &str) -> ServiceResult<()> {
        let mut stored = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::ContactNotFound)?;

        stored.mark_deleted();
        self.repository.update(&stored).await?;

        Ok(())
    }

    async fn list_page(&self, page_size: usize, page: usize) -> ServiceResult<Vec<Contact>> {
        Ok(self.repository.list_page(page_size, page).await?)
    }

    async fn count(&self) -> ServiceResult<usize> {
        Ok(self.repository.count().await?)
    }
}
