pub mod cascade;
pub mod comments;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod posts;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::StoreConfig;

pub use cascade::{delete_post_cascade, CascadeOutcome};
pub use comments::CommentStore;
pub use dataset::Dataset;
pub use domain::{
    Category, Comment, CommentEdit, NewComment, NewPost, Post, PostEdit, TenantToken, VoteOption,
    VotePolicy,
};
pub use error::{RecordKind, StoreError, StoreResult};
pub use posts::PostStore;

/// A tenant's dataset behind its own lock.
pub type SharedDataset = Arc<Mutex<Dataset>>;

/// Process-wide registry of tenant datasets, keyed by token.
///
/// Datasets are created on first use and kept until the process exits.
/// Each one has its own mutex, so work on one tenant never waits on another;
/// the outer lock is only held long enough to look up or insert a handle.
pub struct TenantSpace {
    tenants: RwLock<HashMap<TenantToken, SharedDataset>>,
    vote_policy: VotePolicy,
    tenant_warn_threshold: usize,
}

impl TenantSpace {
    pub fn new(vote_policy: VotePolicy) -> Self {
        Self {
            tenants: RwLock::new(HashMap::new()),
            vote_policy,
            tenant_warn_threshold: 0,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            tenants: RwLock::new(HashMap::new()),
            vote_policy: config.vote_policy,
            tenant_warn_threshold: config.tenant_warn_threshold,
        }
    }

    /// Return the tenant's dataset, seeding it on first reference.
    pub async fn resolve(&self, token: &TenantToken) -> SharedDataset {
        if let Some(dataset) = self.tenants.read().await.get(token) {
            return dataset.clone();
        }

        let mut tenants = self.tenants.write().await;
        // Another request may have seeded it between the two locks.
        if let Some(dataset) = tenants.get(token) {
            return dataset.clone();
        }

        let dataset = Arc::new(Mutex::new(Dataset::seeded(self.vote_policy)));
        tenants.insert(token.clone(), dataset.clone());

        let count = tenants.len();
        tracing::info!("Seeded dataset for new tenant ({} tenants)", count);
        if self.tenant_warn_threshold > 0 && count == self.tenant_warn_threshold {
            tracing::warn!(
                "Tenant count reached {}; datasets are never evicted",
                count
            );
        }

        dataset
    }

    /// The tenant's categories, in seed order.
    pub async fn list_categories(&self, token: &TenantToken) -> Vec<Category> {
        let dataset = self.resolve(token).await;
        let dataset = dataset.lock().await;
        dataset.categories().to_vec()
    }

    #[cfg(test)]
    async fn tenant_count(&self) -> usize {
        self.tenants.read().await.len()
    }
}

impl Default for TenantSpace {
    fn default() -> Self {
        Self::new(VotePolicy::default())
    }
}
