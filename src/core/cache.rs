//! Two-tier cache: in-memory LRU in front of write-once JSON files
//!
//! - L1: in-memory LRU so repeated reads within one run skip the disk
//! - L2: one JSON file per key under the cache directory, kept forever
//!
//! There is no expiry or invalidation. Files are written whole (temp file,
//! then rename) so an interrupted run never leaves a half-written entry.

use lru::LruCache;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    marker::PhantomData,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::debug;

use crate::cli::types::EndYear;
use crate::Result;


/// Path: ~/.cache/nba-heights
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nba-heights")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, replacing any previous content in one rename.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let mut f = fs::File::create(&tmp_path)?;
    f.write_all(contents.as_bytes())?;
    f.sync_all()?;
    drop(f);

    fs::rename(&tmp_path, path)
}

/// Whether a cached read came from storage or had to be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    /// Read was bypassed on request and the entry rewritten.
    Refreshed,
}

impl CacheStatus {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheStatus::Hit)
    }
}

/// Key that maps to one cache file.
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File stem for this entry, without extension
    fn to_file_key(&self) -> String;
}

/// Per-season roster entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RosterCacheKey {
    pub end_year: EndYear,
}

impl CacheKey for RosterCacheKey {
    fn to_file_key(&self) -> String {
        format!("roster_{}", self.end_year.as_u16())
    }
}

/// Per-season champion-starter average
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChampionCacheKey {
    pub end_year: EndYear,
}

impl CacheKey for ChampionCacheKey {
    fn to_file_key(&self) -> String {
        format!("champ_{}", self.end_year.as_u16())
    }
}

/// LRU memory cache backed by a directory of JSON files
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    memory_cache: Mutex<LruCache<K, V>>,
    memory_capacity: usize,
    dir: PathBuf,
    _value: PhantomData<fn() -> V>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Create a cache rooted at `dir` holding up to `memory_capacity` entries in memory
    pub fn new(dir: impl Into<PathBuf>, memory_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            memory_capacity: capacity.get(),
            dir: dir.into(),
            _value: PhantomData,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn file_path(&self, key: &K) -> PathBuf {
        self.dir.join(format!("{}.json", key.to_file_key()))
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Ok(mut memory) = self.memory_cache.lock() {
            if let Some(value) = memory.get(key) {
                return Some(value.clone());
            }
        }

        let value = self.get_from_disk(key)?;
        // Promote to memory cache
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.put(key.clone(), value.clone());
        }
        Some(value)
    }

    /// Store in memory and write the file
    pub fn put(&self, key: K, value: V) -> Result<()> {
        self.put_to_disk(&key, &value)?;
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.put(key, value);
        }
        Ok(())
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = self.file_path(key);
        let content = try_read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Ignoring unreadable cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn put_to_disk(&self, key: &K, value: &V) -> Result<()> {
        let path = self.file_path(key);
        let content = serde_json::to_string_pretty(value)?;
        write_string(&path, &content)?;
        debug!("Wrote cache file {}", path.display());
        Ok(())
    }

    /// Clear memory cache only (keeps disk cache)
    pub fn clear_memory(&self) {
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.clear();
        }
    }

    /// `(entries in memory, capacity)`
    pub fn memory_stats(&self) -> (usize, usize) {
        let len = self.memory_cache.lock().map(|m| m.len()).unwrap_or(0);
        (len, self.memory_capacity)
    }
}
