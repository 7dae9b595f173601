#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Item | Description |
//! |------|-------------|
//! | [`SlruCache`] | Thread-safe segmented LRU cache |
//! | [`SlruCacheConfig`] | Capacity and probation ratio |
//! | [`ConfigError`] | Why a configuration was rejected |
//! | [`Segment`] | Probation or protected |
//! | [`list::List`] | Handle-based ordered list backing each segment |
//!
//! ## Performance Characteristics
//!
//! | Operation | Lock | Time |
//! |-----------|------|------|
//! | `set` | write | O(1) |
//! | `get` | write | O(1) |
//! | `peek` | read | O(1) |
//! | `contains` | read | O(1) |
//! | `len` | read | O(1) |
//! | `purge` | write | O(n) |
//!
//! ## Custom Configuration
//!
//! ```rust
//! use slru_cache::SlruCache;
//! use slru_cache::config::SlruCacheConfig;
//!
//! // Half of the entries on probation
//! let config = SlruCacheConfig::new(100).with_probation_ratio(0.5);
//! let cache: SlruCache<String, Vec<u8>> = SlruCache::init(config, None).unwrap();
//! assert_eq!(cache.probation_capacity(), 50);
//! assert_eq!(cache.protected_capacity(), 50);
//! ```
//!
//! ## Sharing Between Threads
//!
//! ```rust
//! use slru_cache::SlruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(SlruCache::new(1000).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 let key = format!("key_{}_{}", t, i);
//!                 cache.set(key.clone(), i);
//!                 let _ = cache.get(&key);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert!(cache.len() <= 1000);
//! ```
//!
//! ## Modules
//!
//! - [`slru`]: Segmented LRU cache implementation
//! - [`list`]: Ordered list with stable handles
//! - [`config`]: Cache configuration
//! - [`error`]: Configuration errors
//! - [`metrics`]: Metrics collection for cache performance monitoring

/// Doubly linked list with stable, generation-checked handles.
///
/// Each SLRU segment is one of these lists. Nodes live in an arena owned by
/// the list, so moving and removing entries needs no unsafe code.
pub mod list;

/// Cache configuration.
pub mod config;

/// Configuration errors.
pub mod error;

/// Segmented LRU (SLRU) cache implementation.
///
/// Provides a fixed-size cache split into a probation and a protected
/// segment. Entries earn a place in the protected segment by being accessed
/// again while on probation.
pub mod slru;

/// Cache metrics system.
///
/// Counters for hits, misses, promotions and per-segment evictions, reported
/// through the [`CacheMetrics`](metrics::CacheMetrics) trait.
pub mod metrics;

pub use config::SlruCacheConfig;
pub use error::ConfigError;
pub use metrics::CacheMetrics;
pub use slru::{Segment, SlruCache};
