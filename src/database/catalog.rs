use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::seed;
use crate::models::{Activity, ActivityListing};

/// In-memory activity store shared by every request.
///
/// Cloning is cheap and yields a handle to the same catalog. The set of
/// activities is fixed at construction; only rosters change afterwards.
#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    inner: Arc<RwLock<ActivityListing>>,
}

impl ActivityCatalog {
    pub fn new(listing: ActivityListing) -> Self {
        Self {
            inner: Arc::new(RwLock::new(listing)),
        }
    }

    /// Catalog populated from the built-in seed table.
    pub fn seeded() -> Self {
        Self::new(seed::default_activities())
    }

    /// Owned copy of the whole catalog, in catalog order.
    pub async fn snapshot(&self) -> ActivityListing {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Runs `f` against the named activity while holding the write lock.
    ///
    /// Returns `None` when no activity has that name. Nothing else can observe
    /// or modify the catalog until `f` returns.
    pub async fn with_activity_mut<F, R>(&self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut Activity) -> R,
    {
        let mut guard = self.inner.write().await;
        guard.get_mut(name).map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_activity() -> ActivityCatalog {
        let mut listing = ActivityListing::new();
        listing
            .push("Chess Club", Activity::new("Chess", "Fridays", 12, &["a@x.edu"]))
            .unwrap();
        ActivityCatalog::new(listing)
    }

    #[tokio::test]
    async fn mutation_is_visible_through_other_handles() {
        let catalog = one_activity();
        let other = catalog.clone();

        let touched = catalog
            .with_activity_mut("Chess Club", |a| a.participants.push("b@x.edu".into()))
            .await;
        assert!(touched.is_some());

        let chess = other.get("Chess Club").await.unwrap();
        assert_eq!(chess.participants, vec!["a@x.edu", "b@x.edu"]);
    }

    #[tokio::test]
    async fn unknown_name_does_not_run_closure() {
        let catalog = one_activity();
        let mut ran = false;
        let out = catalog
            .with_activity_mut("Nope", |_| {
                ran = true;
            })
            .await;
        assert!(out.is_none());
        assert!(!ran);
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_store() {
        let catalog = one_activity();
        let snapshot = catalog.snapshot().await;
        catalog
            .with_activity_mut("Chess Club", |a| a.participants.clear())
            .await;
        assert_eq!(snapshot.get("Chess Club").unwrap().participants.len(), 1);
        assert!(catalog.get("Chess Club").await.unwrap().participants.is_empty());
    }

    #[tokio::test]
    async fn fresh_instances_are_isolated() {
        let first = ActivityCatalog::seeded();
        let second = ActivityCatalog::seeded();
        first
            .with_activity_mut("Chess Club", |a| a.participants.push("x@x.edu".into()))
            .await;
        assert!(!second
            .get("Chess Club")
            .await
            .unwrap()
            .has_participant("x@x.edu"));
    }
}
