//! Shared test utilities for operation handler tests.
//!
//! [`RecordingStore`] is a small in-memory [`ResourceStore`] that records every
//! call it receives, so tests can assert exactly which storage operations a
//! handler performed, in which order, and with which arguments.

#![allow(dead_code)]

use ldp_operations::storage::ResourceStore;
use ldp_operations::{Conditions, Representation, ResourceIdentifier, ResourceState};
use std::collections::{HashSet, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// A storage call observed by the [`RecordingStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    AddResource {
        container: ResourceIdentifier,
        representation: Representation,
        conditions: Option<Conditions>,
    },
    ModifyResource {
        target: ResourceIdentifier,
        representation: Representation,
        conditions: Option<Conditions>,
    },
    ResourceExists {
        identifier: ResourceIdentifier,
    },
}

impl StoreCall {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, StoreCall::ResourceExists { .. })
    }
}

/// Which store operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Add,
    Modify,
    Exists,
}

#[derive(Debug, thiserror::Error)]
pub enum TestStoreError {
    #[error("Store unavailable")]
    Unavailable,
    #[error("Precondition failed for {0}")]
    PreconditionFailed(String),
}

#[derive(Debug, Default)]
struct StoreState {
    calls: Vec<StoreCall>,
    resources: HashSet<String>,
    queued_exists: VecDeque<bool>,
    fixed_identifier: Option<ResourceIdentifier>,
    fail_on: Option<FailOn>,
}

/// In-memory store recording every call.
///
/// Existence checks answer from queued responses first (see
/// [`RecordingStore::queue_exists`]) and fall back to the set of stored paths.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    state: Arc<Mutex<StoreState>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that always answers `add_resource` with `identifier`.
    pub fn returning(identifier: impl Into<ResourceIdentifier>) -> Self {
        let store = Self::new();
        store.state.lock().unwrap().fixed_identifier = Some(identifier.into());
        store
    }

    /// Store that already contains the given paths.
    pub fn with_resources<I, T>(paths: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let store = Self::new();
        store
            .state
            .lock()
            .unwrap()
            .resources
            .extend(paths.into_iter().map(Into::into));
        store
    }

    /// Answer the next existence check with `exists`, regardless of content.
    pub fn queue_exists(&self, exists: bool) {
        self.state.lock().unwrap().queued_exists.push_back(exists);
    }

    /// Make the given operation fail with [`TestStoreError::Unavailable`].
    pub fn fail_on(&self, operation: FailOn) {
        self.state.lock().unwrap().fail_on = Some(operation);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls().iter().filter(|call| call.is_mutation()).count()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.state.lock().unwrap().resources.contains(path)
    }
}

impl ResourceStore for RecordingStore {
    type Error = TestStoreError;

    fn add_resource(
        &self,
        container: &ResourceIdentifier,
        representation: &Representation,
        conditions: Option<&Conditions>,
    ) -> impl Future<Output = Result<ResourceIdentifier, Self::Error>> + Send {
        let state = Arc::clone(&self.state);
        let container = container.clone();
        let representation = representation.clone();
        let conditions = conditions.cloned();
        async move {
            let mut state = state.lock().unwrap();
            state.calls.push(StoreCall::AddResource {
                container: container.clone(),
                representation: representation.clone(),
                conditions,
            });

            if state.fail_on == Some(FailOn::Add) {
                return Err(TestStoreError::Unavailable);
            }

            let identifier = match &state.fixed_identifier {
                Some(identifier) => identifier.clone(),
                None => {
                    let name = representation
                        .metadata
                        .slug()
                        .map(str::to_string)
                        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
                    container.child(&name)
                }
            };
            state.resources.insert(identifier.path().to_string());
            Ok(identifier)
        }
    }

    fn modify_resource(
        &self,
        target: &ResourceIdentifier,
        representation: &Representation,
        conditions: Option<&Conditions>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        let state = Arc::clone(&self.state);
        let target = target.clone();
        let representation = representation.clone();
        let conditions = conditions.cloned();
        async move {
            let mut state = state.lock().unwrap();
            state.calls.push(StoreCall::ModifyResource {
                target: target.clone(),
                representation,
                conditions: conditions.clone(),
            });

            if state.fail_on == Some(FailOn::Modify) {
                return Err(TestStoreError::Unavailable);
            }

            let current = state.resources.contains(target.path()).then_some(ResourceState {
                etag: None,
                last_modified: None,
            });
            if let Some(conditions) = &conditions {
                if !conditions.matches_metadata(current) {
                    return Err(TestStoreError::PreconditionFailed(target.to_string()));
                }
            }

            state.resources.insert(target.path().to_string());
            Ok(())
        }
    }

    fn resource_exists(
        &self,
        identifier: &ResourceIdentifier,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send {
        let state = Arc::clone(&self.state);
        let identifier = identifier.clone();
        async move {
            let mut state = state.lock().unwrap();
            state.calls.push(StoreCall::ResourceExists {
                identifier: identifier.clone(),
            });

            if state.fail_on == Some(FailOn::Exists) {
                return Err(TestStoreError::Unavailable);
            }

            Ok(match state.queued_exists.pop_front() {
                Some(exists) => exists,
                None => state.resources.contains(identifier.path()),
            })
        }
    }
}

/// Install a test logger once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An empty turtle body, the usual payload of these tests.
pub fn turtle_body() -> Representation {
    Representation::new("", "text/turtle")
}
