//! Catalog of resource services, one per kind

use std::sync::Arc;

use crate::adapters::{InMemoryResourceStore, MockResourceStore, RandomIdSource, SequenceIdSource};
use crate::config::{Config, IdMode, StoreMode};
use crate::domain::entities::ResourceKind;
use crate::domain::ports::{IdSource, ResourceStore};

use super::ResourceService;

pub type DynResourceService = ResourceService<dyn ResourceStore>;

#[derive(Clone)]
pub struct Catalog {
    pub posts: DynResourceService,
    pub users: DynResourceService,
    pub comments: DynResourceService,
    pub todos: DynResourceService,
}

fn id_source(mode: IdMode) -> Arc<dyn IdSource> {
    match mode {
        IdMode::Random => Arc::new(RandomIdSource),
        IdMode::Sequential => Arc::new(SequenceIdSource::new()),
    }
}

impl Catalog {
    /// Build from a store factory called once per kind
    pub fn with_stores<F>(mut make: F) -> Self
    where
        F: FnMut(ResourceKind) -> Arc<dyn ResourceStore>,
    {
        Self {
            posts: ResourceService::new(make(ResourceKind::Post)),
            users: ResourceService::new(make(ResourceKind::User)),
            comments: ResourceService::new(make(ResourceKind::Comment)),
            todos: ResourceService::new(make(ResourceKind::Todo)),
        }
    }

    pub fn stateless(ids: IdMode) -> Self {
        Self::with_stores(|kind| Arc::new(MockResourceStore::for_kind(kind, id_source(ids))))
    }

    pub fn stateful(ids: IdMode) -> Self {
        Self::with_stores(|kind| Arc::new(InMemoryResourceStore::seeded(kind, id_source(ids))))
    }

    pub fn from_config(config: &Config) -> Self {
        match config.store_mode {
            StoreMode::Stateless => Self::stateless(config.id_mode),
            StoreMode::Stateful => Self::stateful(config.id_mode),
        }
    }

    pub fn get(&self, kind: ResourceKind) -> &DynResourceService {
        match kind {
            ResourceKind::Post => &self.posts,
            ResourceKind::User => &self.users,
            ResourceKind::Comment => &self.comments,
            ResourceKind::Todo => &self.todos,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
