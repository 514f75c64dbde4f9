//! Flat-file CRUD for the catalog collections.
//!
//! Wines and news articles share the same storage pattern: one JSON
//! file holding an array of records, rewritten whole on every mutation.
//! [`Catalog`] is generic over the record type; the record contributes
//! its identity and timestamp fields through [`CatalogItem`].

use std::marker::PhantomData;
use std::path::PathBuf;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// A record that can live in a [`Catalog`].
pub trait CatalogItem: Clone + Serialize + DeserializeOwned {
    /// Human name of the collection, used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn created_at(&self) -> &str;
    fn set_created_at(&mut self, created_at: String);
    fn set_updated_at(&mut self, updated_at: Option<String>);
}

/// One JSON-file-backed collection.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Open a catalog at `path`, seeding the file with `seed` if it
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>, seed: Vec<T>) -> StoreResult<Catalog<T>> {
        let catalog = Catalog {
            path: path.into(),
            _marker: PhantomData,
        };
        if !catalog.path.exists() {
            badin_common::write_json(&catalog.path, &seed)?;
            info!(
                kind = T::KIND,
                count = seed.len(),
                path = %catalog.path.display(),
                "seeded catalog file"
            );
        }
        Ok(catalog)
    }

    pub fn list(&self) -> StoreResult<Vec<T>> {
        Ok(badin_common::read_json(&self.path)?)
    }

    pub fn get(&self, id: &str) -> StoreResult<T> {
        self.list()?
            .into_iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| StoreError::NotFound(T::KIND.to_string()))
    }

    /// Insert a new record. The stored id and creation timestamp are
    /// assigned here; whatever the caller put in those fields is
    /// discarded.
    pub fn create(&self, mut item: T) -> StoreResult<T> {
        item.set_id(Uuid::new_v4().to_string());
        item.set_created_at(Utc::now().to_rfc3339());
        item.set_updated_at(None);

        let mut items = self.list()?;
        items.push(item.clone());
        badin_common::write_json(&self.path, &items)?;
        Ok(item)
    }

    /// Replace the record with the stored `id`. The stored id and
    /// creation timestamp always win over the incoming payload; the
    /// update timestamp is stamped fresh.
    pub fn update(&self, id: &str, mut item: T) -> StoreResult<T> {
        let mut items = self.list()?;
        let slot = items
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| StoreError::NotFound(T::KIND.to_string()))?;

        item.set_id(slot.id().to_string());
        item.set_created_at(slot.created_at().to_string());
        item.set_updated_at(Some(Utc::now().to_rfc3339()));

        *slot = item.clone();
        badin_common::write_json(&self.path, &items)?;
        Ok(item)
    }

    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(StoreError::NotFound(T::KIND.to_string()));
        }
        badin_common::write_json(&self.path, &items)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{default_wines, Wine, WineKind};

    fn new_wine(name: &str) -> Wine {
        Wine {
            id: String::new(),
            name: name.to_string(),
            kind: WineKind::Bile,
            year: "2023".to_string(),
            description: "Svěží a ovocné.".to_string(),
            price: "180 Kč".to_string(),
            image: "/wines/test.jpg".to_string(),
            attributes: vec!["suché".to_string()],
            created_at: String::new(),
            updated_at: None,
        }
    }

    fn open_empty(dir: &tempfile::TempDir) -> Catalog<Wine> {
        Catalog::open(dir.path().join("wines.json"), Vec::new()).unwrap()
    }

    #[test]
    fn open_seeds_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wines.json");

        let catalog: Catalog<Wine> = Catalog::open(&path, default_wines()).unwrap();
        catalog.delete(catalog.list().unwrap()[0].id()).unwrap();
        let remaining = catalog.list().unwrap().len();

        // Re-opening must not re-seed over the mutated file.
        let catalog: Catalog<Wine> = Catalog::open(&path, default_wines()).unwrap();
        assert_eq!(catalog.list().unwrap().len(), remaining);
    }

    #[test]
    fn create_assigns_id_and_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = open_empty(&dir);

        let mut wine = new_wine("Ryzlink rýnský");
        wine.id = "client-supplied".to_string();
        wine.created_at = "1999-01-01T00:00:00Z".to_string();

        let stored = catalog.create(wine).unwrap();
        assert_ne!(stored.id, "client-supplied");
        assert!(Uuid::parse_str(&stored.id).is_ok());
        assert_ne!(stored.created_at, "1999-01-01T00:00:00Z");
        assert!(stored.updated_at.is_none());
    }

    #[test]
    fn update_preserves_identity_against_a_lying_payload() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = open_empty(&dir);

        let stored = catalog.create(new_wine("Pálava")).unwrap();

        let mut payload = new_wine("Pálava výběr z hroznů");
        payload.id = "forged-id".to_string();
        payload.created_at = "1999-01-01T00:00:00Z".to_string();

        let updated = catalog.update(&stored.id, payload).unwrap();
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.created_at, stored.created_at);
        assert_eq!(updated.name, "Pálava výběr z hroznů");
        assert!(updated.updated_at.is_some());

        // And the same is true of what landed on disk.
        let reread = catalog.get(&stored.id).unwrap();
        assert_eq!(reread, updated);
    }

    #[test]
    fn missing_ids_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = open_empty(&dir);

        assert!(matches!(
            catalog.get("nope"),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            catalog.update("nope", new_wine("x")),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            catalog.delete("nope"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = open_empty(&dir);

        let first = catalog.create(new_wine("První")).unwrap();
        let second = catalog.create(new_wine("Druhé")).unwrap();

        catalog.delete(&first.id).unwrap();
        let remaining = catalog.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
    }
}
