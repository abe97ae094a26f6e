//! JSON file holding the full listing collection.

use std::path::{Path, PathBuf};

use anyhow::Context;
use common::listing::Listing;
use tokio::sync::Mutex;
use tracing::info;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { total: usize },
    DuplicateId(u64),
}

/// Reads are lock-free; insertions are serialized so concurrent writers do
/// not drop each other's listings.
#[derive(Debug)]
pub struct ListingsFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ListingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_all(&self) -> anyhow::Result<Vec<Listing>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("listings file {} could not be read", self.path.display()))?;
        let listings = serde_json::from_str(&contents)
            .with_context(|| format!("listings file {} is not a JSON array of listings", self.path.display()))?;
        Ok(listings)
    }

    /// Append one listing and rewrite the whole file.
    pub async fn insert(&self, listing: Listing) -> anyhow::Result<InsertOutcome> {
        let _guard = self.write_lock.lock().await;
        let mut listings = self.read_all().await?;
        if listings.iter().any(|existing| existing.id == listing.id) {
            return Ok(InsertOutcome::DuplicateId(listing.id));
        }
        info!("Inserting listing {} into {}", listing.id, self.path.display());
        listings.push(listing);
        self.write_all(&listings).await?;
        Ok(InsertOutcome::Inserted { total: listings.len() })
    }

    async fn write_all(&self, listings: &[Listing]) -> anyhow::Result<()> {
        let json = encode_listings(listings)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

/// Storage form of the collection: one pretty printed JSON array.
pub fn encode_listings(listings: &[Listing]) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(listings).context("Failed to serialize listings")
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn listing(id: u64) -> Listing {
        Listing {
            id,
            name: format!("Room {id}"),
            price_per_day: 100.0,
            room_type: String::new(),
            bedrooms: 1,
            beds: 1,
            bathrooms: 1,
            amenities: BTreeSet::new(),
            booking_options: BTreeSet::new(),
            building_type: String::new(),
            age: 1,
            city: "Seoul".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = ListingsFile::new(dir.path().join("absent.json"));
        let err = file.read_all().await.unwrap_err();
        assert!(err.to_string().contains("could not be read"));
        assert!(file.insert(listing(1)).await.is_err());
    }

    #[tokio::test]
    async fn insert_rewrites_whole_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        std::fs::write(&path, serde_json::to_string(&vec![listing(1)]).unwrap()).unwrap();
        let file = ListingsFile::new(&path);

        assert_eq!(file.insert(listing(2)).await.unwrap(), InsertOutcome::Inserted { total: 2 });
        assert_eq!(file.insert(listing(2)).await.unwrap(), InsertOutcome::DuplicateId(2));

        let on_disk: Vec<Listing> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn insert_keeps_existing_records_as_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        let mut first = listing(1);
        first.room_type = "방".to_string();
        let mut second = listing(2);
        second.room_type = "집 전체".to_string();
        std::fs::write(&path, encode_listings(&[first.clone(), second]).unwrap()).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let file = ListingsFile::new(&path);
        file.insert(listing(3)).await.unwrap();

        let after = std::fs::read_to_string(&path).unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&after).unwrap();
        assert_eq!(records[0]["roomType"], "방");
        assert_eq!(records[1]["roomType"], "집 전체");
        assert_eq!(records[2]["roomType"], "");
        assert!(after.starts_with(before.trim_end_matches(['\n', ']'])));
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error_and_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        std::fs::write(&path, "{not json").unwrap();
        let file = ListingsFile::new(&path);

        let err = file.read_all().await.unwrap_err();
        assert!(err.to_string().contains("is not a JSON array of listings"));
        assert!(file.insert(listing(1)).await.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        std::fs::write(&path, "[]").unwrap();
        let file = std::sync::Arc::new(ListingsFile::new(&path));

        let tasks: Vec<_> = (1..=8)
            .map(|id| {
                let file = file.clone();
                tokio::spawn(async move { file.insert(listing(id)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(file.read_all().await.unwrap().len(), 8);
    }
}
