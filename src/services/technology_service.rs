use std::sync::Arc;

use crate::database::CatalogStore;
use crate::dto::technology_dto::TechnologyView;
use crate::error::Result;

#[derive(Clone)]
pub struct TechnologyService {
    store: Arc<dyn CatalogStore>,
}

impl TechnologyService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Navigation list: heaviest `sort_order` first, ties by name.
    pub async fn list(&self) -> Result<Vec<TechnologyView>> {
        let mut items = self.store.list_technologies().await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to list technologies");
            e
        })?;

        items.sort_by(|a, b| {
            b.sort_order
                .cmp(&a.sort_order)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn exists(&self, name: &str) -> Result<bool> {
        self.store.technology_exists(name).await.map_err(|e| {
            tracing::error!(error = ?e, technology = %name, "Failed to check technology");
            e
        })
    }
}
