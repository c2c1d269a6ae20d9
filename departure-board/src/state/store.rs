//! In-memory entity state store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::convert::{ConversionError, convert_entity_state};
use super::entity::{EntityState, StateSource};
use super::types::RawEntityState;

/// Thread-safe store of the latest state per entity.
///
/// Writers replace an entity's state whole. Readers take a
/// [`StateSnapshot`] once per render pass so every entity on a card is read
/// from the same moment.
#[derive(Clone, Default)]
pub struct StateStore {
    inner: Arc<RwLock<HashMap<String, EntityState>>>,
}

impl StateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert and store a raw state for `entity_id`.
    ///
    /// On error the previous state is left untouched.
    pub async fn ingest(
        &self,
        entity_id: &str,
        raw: &RawEntityState,
    ) -> Result<(), ConversionError> {
        let state = convert_entity_state(entity_id, raw)?;
        debug!(entity_id, kind = state_kind(&state), "entity state updated");
        self.set(entity_id, state).await;
        Ok(())
    }

    /// Ingest a list of raw states that carry their own `entity_id`.
    ///
    /// Entries without an id, and entries that fail to convert, are skipped;
    /// the rest are stored.
    pub async fn ingest_all(&self, raws: &[RawEntityState]) -> IngestSummary {
        let mut converted = Vec::with_capacity(raws.len());
        let mut skipped = 0;
        for raw in raws {
            let Some(entity_id) = raw.entity_id.as_deref() else {
                skipped += 1;
                continue;
            };
            match convert_entity_state(entity_id, raw) {
                Ok(state) => converted.push((entity_id.to_string(), state)),
                Err(e) => {
                    warn!(entity_id, error = %e, "skipping entity state");
                    skipped += 1;
                }
            }
        }

        let stored = converted.len();
        let mut guard = self.inner.write().await;
        guard.extend(converted);
        IngestSummary { stored, skipped }
    }

    /// Store an already converted state.
    pub async fn set(&self, entity_id: &str, state: EntityState) {
        let mut guard = self.inner.write().await;
        guard.insert(entity_id.to_string(), state);
    }

    /// Forget an entity. Returns whether it was present.
    pub async fn remove(&self, entity_id: &str) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(entity_id).is_some()
    }

    /// Number of entities held.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Copy of the current states for one render pass.
    pub async fn snapshot(&self) -> StateSnapshot {
        let guard = self.inner.read().await;
        StateSnapshot(guard.clone())
    }
}

/// Outcome of [`StateStore::ingest_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestSummary {
    pub stored: usize,
    pub skipped: usize,
}

/// Immutable copy of every entity's state at one moment.
#[derive(Debug, Clone, Default)]
pub struct StateSnapshot(HashMap<String, EntityState>);

impl StateSource for StateSnapshot {
    fn state(&self, entity_id: &str) -> &EntityState {
        self.0.state(entity_id)
    }
}

fn state_kind(state: &EntityState) -> &'static str {
    match state {
        EntityState::Departures(_) => "departures",
        EntityState::Deviations(_) => "deviations",
        EntityState::Absent => "absent",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawEntityState {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn ingest_then_snapshot() {
        let store = StateStore::new();
        assert!(store.is_empty().await);

        store
            .ingest(
                "sensor.slussen",
                &raw(json!({
                    "attributes": { "friendly_name": "Slussen", "departures": [] }
                })),
            )
            .await
            .unwrap();

        assert_eq!(store.len().await, 1);
        let snapshot = store.snapshot().await;
        assert!(matches!(
            snapshot.state("sensor.slussen"),
            EntityState::Departures(d) if d.friendly_name == "Slussen"
        ));
        assert_eq!(snapshot.state("sensor.other"), &EntityState::Absent);
    }

    #[tokio::test]
    async fn failed_ingest_keeps_previous_state() {
        let store = StateStore::new();
        store
            .ingest(
                "sensor.slussen",
                &raw(json!({ "attributes": { "departures": [] } })),
            )
            .await
            .unwrap();

        let result = store
            .ingest(
                "sensor.slussen",
                &raw(json!({
                    "last_updated": "garbage",
                    "attributes": { "departures": [] }
                })),
            )
            .await;
        assert!(result.is_err());

        let snapshot = store.snapshot().await;
        assert!(matches!(
            snapshot.state("sensor.slussen"),
            EntityState::Departures(_)
        ));
    }

    #[tokio::test]
    async fn snapshot_is_isolated_from_later_writes() {
        let store = StateStore::new();
        let before = store.snapshot().await;

        store.set("sensor.a", EntityState::Absent).await;
        store
            .ingest("sensor.b", &raw(json!({ "attributes": { "deviations": [] } })))
            .await
            .unwrap();

        assert_eq!(before.state("sensor.b"), &EntityState::Absent);
        assert!(matches!(
            store.snapshot().await.state("sensor.b"),
            EntityState::Deviations(_)
        ));
    }

    #[tokio::test]
    async fn remove_entity() {
        let store = StateStore::new();
        store.set("sensor.a", EntityState::Absent).await;

        assert!(store.remove("sensor.a").await);
        assert!(!store.remove("sensor.a").await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn ingest_all_skips_entries_without_id() {
        let store = StateStore::new();
        let raws = vec![
            raw(json!({ "entity_id": "sensor.a", "attributes": { "departures": [] } })),
            raw(json!({ "attributes": { "departures": [] } })),
            raw(json!({ "entity_id": "sensor.b", "attributes": { "deviations": [] } })),
        ];

        let summary = store.ingest_all(&raws).await;
        assert_eq!(summary, IngestSummary { stored: 2, skipped: 1 });
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn ingest_all_skips_unconvertible_entries() {
        let store = StateStore::new();
        let raws = vec![
            raw(json!({
                "entity_id": "sensor.good",
                "last_updated": "2024-03-15T13:00:00+01:00",
                "attributes": { "departures": [] }
            })),
            raw(json!({
                "entity_id": "sensor.bad",
                "last_updated": "garbage",
                "attributes": { "departures": [] }
            })),
        ];

        let summary = store.ingest_all(&raws).await;
        assert_eq!(summary, IngestSummary { stored: 1, skipped: 1 });

        let snapshot = store.snapshot().await;
        assert!(matches!(
            snapshot.state("sensor.good"),
            EntityState::Departures(_)
        ));
        assert_eq!(snapshot.state("sensor.bad"), &EntityState::Absent);
    }
}
