// Rust guideline compliant 2026-10-14

//! In-memory content cache with write-through refresh.
//!
//! The cache holds every section of the site. Mutations go to the document
//! store first; the affected section is then re-read from disk so the cache
//! never diverges from what was persisted.
//!
//! Blob keys are content addressed, so one image can back several records.
//! A blob is only deleted once no cached record refers to its key.

use crate::error::Result;
use folio_core::{
    BlobRef, BlobStore, Certificate, Contact, Education, Experience, FsBlobStore, Organization,
    Project, Record, Section, Storage,
};
use serde::Serialize;

/// Every section of the site, as last read from the document store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteContent {
    /// Work experience.
    pub experience: Vec<Experience>,
    /// Schooling.
    pub education: Vec<Education>,
    /// Organizations.
    pub organizations: Vec<Organization>,
    /// Projects.
    pub projects: Vec<Project>,
    /// Certificates.
    pub certificates: Vec<Certificate>,
    /// Contact methods.
    pub contacts: Vec<Contact>,
}

impl SiteContent {
    /// Returns the number of records in a section.
    #[must_use]
    pub fn count(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.experience.len(),
            Section::Education => self.education.len(),
            Section::Organizations => self.organizations.len(),
            Section::Projects => self.projects.len(),
            Section::Certificates => self.certificates.len(),
            Section::Contacts => self.contacts.len(),
        }
    }

    /// Returns true if any record in any section has the image with `key`.
    #[must_use]
    pub fn references(&self, key: &str) -> bool {
        fn uses<T: Record>(records: &[T], key: &str) -> bool {
            records
                .iter()
                .any(|record| record.image().is_some_and(|blob| blob.key == key))
        }

        uses(&self.experience, key)
            || uses(&self.education, key)
            || uses(&self.organizations, key)
            || uses(&self.projects, key)
            || uses(&self.certificates, key)
            || uses(&self.contacts, key)
    }
}

/// Records that have a slot in [`SiteContent`].
pub trait Cached: Record {
    /// Returns the cached records of this type.
    fn slot(content: &SiteContent) -> &Vec<Self>;

    /// Returns the cached records of this type, mutably.
    fn slot_mut(content: &mut SiteContent) -> &mut Vec<Self>;
}

macro_rules! cached {
    ($ty:ty, $field:ident) => {
        impl Cached for $ty {
            fn slot(content: &SiteContent) -> &Vec<Self> {
                &content.$field
            }

            fn slot_mut(content: &mut SiteContent) -> &mut Vec<Self> {
                &mut content.$field
            }
        }
    };
}

cached!(Experience, experience);
cached!(Education, education);
cached!(Organization, organizations);
cached!(Project, projects);
cached!(Certificate, certificates);
cached!(Contact, contacts);

/// An image to attach to a record.
#[derive(Debug, Clone, Copy)]
pub struct Upload<'a> {
    /// File contents.
    pub bytes: &'a [u8],
    /// Original file name.
    pub filename: &'a str,
}

/// Content cache over a document store and a blob store.
pub struct ContentCache<B: BlobStore = FsBlobStore> {
    storage: Storage,
    blobs: B,
    content: SiteContent,
}

impl<B: BlobStore> ContentCache<B> {
    /// Creates a cache and loads every section.
    ///
    /// # Errors
    ///
    /// Returns an error if any collection cannot be read.
    pub fn load(storage: Storage, blobs: B) -> Result<Self> {
        let mut cache = Self {
            storage,
            blobs,
            content: SiteContent::default(),
        };
        cache.refresh_all()?;
        Ok(cache)
    }

    /// Returns the cached site content.
    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Returns the underlying document store.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Returns the cached records of one section.
    #[must_use]
    pub fn get<T: Cached>(&self) -> &[T] {
        T::slot(&self.content)
    }

    /// Returns a cached record by exact ID.
    #[must_use]
    pub fn find<T: Cached>(&self, id: &str) -> Option<&T> {
        self.get::<T>().iter().find(|record| record.id() == id)
    }

    /// Resolves a full or partial ID against the cached section.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is unknown or ambiguous.
    pub fn resolve_id<T: Cached>(&self, partial: &str) -> Result<String> {
        Ok(folio_core::identity::resolve_partial_id(
            partial,
            self.get::<T>().iter().map(|r| r.id()),
        )?)
    }

    /// Re-reads one section from the document store.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn refresh(&mut self, section: Section) -> Result<()> {
        match section {
            Section::Experience => self.reload::<Experience>(),
            Section::Education => self.reload::<Education>(),
            Section::Organizations => self.reload::<Organization>(),
            Section::Projects => self.reload::<Project>(),
            Section::Certificates => self.reload::<Certificate>(),
            Section::Contacts => self.reload::<Contact>(),
        }
    }

    /// Re-reads every section.
    ///
    /// # Errors
    ///
    /// Returns an error if any collection cannot be read.
    pub fn refresh_all(&mut self) -> Result<()> {
        for section in Section::ALL {
            self.refresh(section)?;
        }
        Ok(())
    }

    fn reload<T: Cached>(&mut self) -> Result<()> {
        *T::slot_mut(&mut self.content) = self.storage.list::<T>()?;
        Ok(())
    }
}

impl<B: BlobStore> ContentCache<B> {
    /// Stores a new record, uploading its image first when given.
    ///
    /// # Returns
    ///
    /// The stored record with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload or the write fails. A blob uploaded for
    /// a record that could not be stored is removed again.
    pub fn create<T: Cached>(&mut self, mut record: T, image: Option<Upload<'_>>) -> Result<T> {
        let uploaded = match image {
            Some(upload) => Some(self.attach(&mut record, upload)?.0),
            None => None,
        };

        let created = match self.storage.create(record) {
            Ok(created) => created,
            Err(err) => {
                if let Some(blob) = uploaded {
                    self.discard_blob(&blob);
                }
                return Err(err.into());
            }
        };

        self.refresh(T::SECTION)?;
        tracing::info!(section = %T::SECTION, id = created.id(), "Record created");
        Ok(created)
    }

    /// Replaces a record, swapping its image when a new one is given.
    ///
    /// The previous image is deleted only after the record is stored, and only
    /// when no other record shares it.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload or the write fails.
    pub fn update<T: Cached>(&mut self, mut record: T, image: Option<Upload<'_>>) -> Result<T> {
        let (uploaded, replaced) = match image {
            Some(upload) => {
                let (blob, previous) = self.attach(&mut record, upload)?;
                (Some(blob), previous)
            }
            None => (None, None),
        };

        if let Err(err) = self.storage.update(&record) {
            if let Some(blob) = uploaded {
                self.discard_blob(&blob);
            }
            return Err(err.into());
        }

        self.refresh(T::SECTION)?;
        if let Some(old) = &replaced {
            self.discard_blob(old);
        }
        tracing::info!(section = %T::SECTION, id = record.id(), "Record updated");
        Ok(record)
    }

    /// Deletes a record and its image.
    ///
    /// # Returns
    ///
    /// The removed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or cannot be removed.
    /// Failing to delete the image afterwards is logged only.
    pub fn delete<T: Cached>(&mut self, id: &str) -> Result<T> {
        let removed: T = self.storage.delete(id)?;
        self.refresh(T::SECTION)?;
        if let Some(blob) = removed.image() {
            self.discard_blob(blob);
        }
        tracing::info!(section = %T::SECTION, id, "Record deleted");
        Ok(removed)
    }

    /// Uploads an image and sets it on the record, returning the new blob and
    /// the one it replaced.
    fn attach<T: Cached>(
        &self,
        record: &mut T,
        upload: Upload<'_>,
    ) -> Result<(BlobRef, Option<BlobRef>)> {
        let blob = self.blobs.upload(upload.bytes, upload.filename)?;
        match record.set_image(Some(blob.clone())) {
            Ok(previous) => Ok((blob, previous)),
            Err(err) => {
                self.discard_blob(&blob);
                Err(err.into())
            }
        }
    }

    /// Deletes a blob unless a cached record still refers to it.
    fn discard_blob(&self, blob: &BlobRef) {
        if self.content.references(&blob.key) {
            tracing::debug!(key = %blob.key, "Blob still in use; kept");
            return;
        }
        if let Err(err) = self.blobs.delete(&blob.key) {
            tracing::warn!(key = %blob.key, "Failed to delete blob: {}", err);
        }
    }
}
