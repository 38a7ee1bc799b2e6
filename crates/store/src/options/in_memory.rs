//! In-memory filter option store for dev/test.

use std::sync::RwLock;

use async_trait::async_trait;

use launchdir_catalog::Country;

use crate::error::StoreResult;

use super::{FilterOptionStore, OptionTable};

#[derive(Debug, Default)]
pub struct InMemoryFilterOptionStore {
    categories: RwLock<Vec<String>>,
    labels: RwLock<Vec<String>>,
    tags: RwLock<Vec<String>>,
    countries: RwLock<Vec<Country>>,
}

impl InMemoryFilterOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the country table (there is no application write path for it).
    pub fn seed_countries(&self, countries: Vec<Country>) {
        *self.countries.write().unwrap() = countries;
    }

    fn table(&self, table: OptionTable) -> &RwLock<Vec<String>> {
        match table {
            OptionTable::Categories => &self.categories,
            OptionTable::Labels => &self.labels,
            OptionTable::Tags => &self.tags,
        }
    }
}

#[async_trait]
impl FilterOptionStore for InMemoryFilterOptionStore {
    async fn category_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.categories.read().unwrap().clone())
    }

    async fn label_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.labels.read().unwrap().clone())
    }

    async fn tag_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.tags.read().unwrap().clone())
    }

    async fn countries(&self) -> StoreResult<Vec<Country>> {
        Ok(self.countries.read().unwrap().clone())
    }

    async fn insert_if_absent(&self, table: OptionTable, name: &str) -> StoreResult<()> {
        let mut names = self.table(table).write().unwrap();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_insert_is_a_silent_no_op() {
        let store = InMemoryFilterOptionStore::new();
        store.insert_if_absent(OptionTable::Tags, "accelerator").await.unwrap();
        store.insert_if_absent(OptionTable::Tags, "accelerator").await.unwrap();

        assert_eq!(store.tag_names().await.unwrap(), vec!["accelerator"]);
    }

    #[tokio::test]
    async fn tables_are_independent() {
        let store = InMemoryFilterOptionStore::new();
        store.insert_if_absent(OptionTable::Categories, "incubator").await.unwrap();

        assert_eq!(store.category_names().await.unwrap(), vec!["incubator"]);
        assert!(store.label_names().await.unwrap().is_empty());
        assert!(store.tag_names().await.unwrap().is_empty());
    }
}
