//! Bed-type loader — de-duplicated bed types with loading and error flags.

use bedmgmt_domain::bed_type::{BedType, dedup_by_name};
use bedmgmt_domain::error::BedMgmtError;

use crate::ports::BedBackend;

/// Outcome of loading bed types.
///
/// `bed_types` is empty while loading and after a failure; the failure
/// itself is reported through `error`, never raised.
#[derive(Debug, Default)]
pub struct BedTypes {
    pub bed_types: Vec<BedType>,
    pub is_loading: bool,
    pub error: Option<BedMgmtError>,
}

impl BedTypes {
    /// State before the fetch settles.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            bed_types: Vec::new(),
            is_loading: true,
            error: None,
        }
    }

    /// State after the fetch settled.
    #[must_use]
    pub fn settled(result: Result<Vec<BedType>, BedMgmtError>) -> Self {
        match result {
            Ok(raw) => Self {
                bed_types: dedup_by_name(raw),
                is_loading: false,
                error: None,
            },
            Err(err) => Self {
                bed_types: Vec::new(),
                is_loading: false,
                error: Some(err),
            },
        }
    }
}

/// Loads bed types from the backend.
pub struct BedTypeLoader<B> {
    backend: B,
}

impl<B: BedBackend> BedTypeLoader<B> {
    /// Create a new loader backed by the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch bed types once, keeping the first entry for every name.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> BedTypes {
        let loaded = BedTypes::settled(self.backend.list_bed_types().await);
        match &loaded.error {
            Some(err) => tracing::warn!(error = %err, "failed to load bed types"),
            None => tracing::debug!(count = loaded.bed_types.len(), "loaded bed types"),
        }
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryBackend;

    fn backend_with(names: &[&str]) -> InMemoryBackend {
        InMemoryBackend {
            bed_types: names.iter().map(|n| BedType::new(*n, *n)).collect(),
            ..InMemoryBackend::default()
        }
    }

    #[tokio::test]
    async fn should_deduplicate_by_name_keeping_first_occurrence() {
        let loader = BedTypeLoader::new(backend_with(&["A", "B", "A"]));

        let loaded = loader.load().await;

        let names: Vec<&str> = loaded.bed_types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(!loaded.is_loading);
        assert!(loaded.error.is_none());
    }

    #[tokio::test]
    async fn should_yield_identical_output_when_loaded_twice() {
        let loader = BedTypeLoader::new(backend_with(&["ICU", "PED", "ICU", "PED"]));

        let first = loader.load().await;
        let second = loader.load().await;

        assert_eq!(first.bed_types, second.bed_types);
    }

    #[tokio::test]
    async fn should_surface_error_with_empty_list_when_fetch_fails() {
        let backend = InMemoryBackend {
            fail_bed_types: true,
            ..backend_with(&["A"])
        };
        let loader = BedTypeLoader::new(backend);

        let loaded = loader.load().await;

        assert!(loaded.bed_types.is_empty());
        assert!(matches!(loaded.error, Some(BedMgmtError::Backend(_))));
    }

    #[test]
    fn should_start_empty_while_loading() {
        let loading = BedTypes::loading();
        assert!(loading.is_loading);
        assert!(loading.bed_types.is_empty());
        assert!(loading.error.is_none());
    }
}
