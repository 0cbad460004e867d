#![allow(dead_code)]

use async_trait::async_trait;
use ip_gate_application::ports::{GeoResolver, KeyValueCache, RestrictionRepository};
use ip_gate_domain::{Category, ClientAddress, DomainError, GeoInfo, RestrictionRule, Scope};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub fn rule(category: Category, scope: Scope, value: &str) -> RestrictionRule {
    RestrictionRule::new(category, scope, value, None)
}

#[derive(Clone)]
pub struct MockRestrictionRepository {
    rules: Arc<RwLock<Vec<RestrictionRule>>>,
    should_fail: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl MockRestrictionRepository {
    pub fn new() -> Self {
        Self::with_rules(vec![])
    }

    pub fn with_rules(rules: Vec<RestrictionRule>) -> Self {
        Self {
            rules: Arc::new(RwLock::new(rules)),
            should_fail: Arc::new(AtomicBool::new(false)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_rules(&self, rules: Vec<RestrictionRule>) {
        *self.rules.write().await = rules;
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockRestrictionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RestrictionRepository for MockRestrictionRepository {
    async fn get_enabled(&self) -> Result<Vec<RestrictionRule>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable(
                "Mock store unreachable".to_string(),
            ));
        }
        Ok(self.rules.read().await.clone())
    }
}

#[derive(Clone)]
pub struct MockKeyValueCache {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    ttls: Arc<RwLock<HashMap<String, Duration>>>,
    should_fail: Arc<AtomicBool>,
    gets: Arc<AtomicUsize>,
    sets: Arc<AtomicUsize>,
}

impl MockKeyValueCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttls: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
            gets: Arc::new(AtomicUsize::new(0)),
            sets: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn insert_raw(&self, key: &str, value: &[u8]) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
    }

    pub async fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.ttls.read().await.get(key).copied()
    }

    pub async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn set_count(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

impl Default for MockKeyValueCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueCache for MockKeyValueCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::CacheUnavailable("Mock cache down".to_string()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::CacheUnavailable("Mock cache down".to_string()));
        }
        self.entries.write().await.insert(key.to_string(), value);
        self.ttls.write().await.insert(key.to_string(), ttl);
        Ok(())
    }
}

pub struct MockGeoResolver {
    locations: std::sync::RwLock<HashMap<String, GeoInfo>>,
    lookups: AtomicUsize,
}

impl MockGeoResolver {
    pub fn new() -> Self {
        Self {
            locations: std::sync::RwLock::new(HashMap::new()),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_location(self, ip: &str, country: &str, continent: &str) -> Self {
        self.locations
            .write()
            .unwrap()
            .insert(ip.to_string(), GeoInfo::new(country, continent));
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl Default for MockGeoResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoResolver for MockGeoResolver {
    fn resolve(&self, address: &ClientAddress) -> GeoInfo {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.locations
            .read()
            .unwrap()
            .get(address.as_str())
            .cloned()
            .unwrap_or_default()
    }
}
