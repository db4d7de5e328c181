//! Map Configuration
//!
//! Configuration for the forgetting map. The struct has public fields for
//! simple instantiation: create it with all fields set, no builder needed.
//!
//! # Examples
//!
//! ```
//! use forgetting_map::config::ForgettingMapConfig;
//! use forgetting_map::ForgettingMap;
//! use core::num::NonZeroUsize;
//!
//! let config = ForgettingMapConfig {
//!     capacity: NonZeroUsize::new(100).unwrap(),
//! };
//! let map: ForgettingMap<String, i32> = ForgettingMap::init(config, None);
//! ```

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for a forgetting map.
///
/// # Fields
///
/// - `capacity`: maximum number of entries the map can hold. Fixed for the
///   lifetime of the map; there is no resizing. `NonZeroUsize` makes a
///   zero-capacity map unrepresentable, so construction has no error path.
///
/// # Examples
///
/// ```
/// use forgetting_map::config::ForgettingMapConfig;
/// use core::num::NonZeroUsize;
///
/// let config = ForgettingMapConfig {
///     capacity: NonZeroUsize::new(1000).unwrap(),
/// };
/// assert_eq!(config.capacity.get(), 1000);
/// ```
#[derive(Clone, Copy)]
pub struct ForgettingMapConfig {
    /// Maximum number of key-value pairs the map can hold.
    pub capacity: NonZeroUsize,
}

impl ForgettingMapConfig {
    /// Creates a configuration with the given capacity.
    #[inline]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { capacity }
    }

    /// Returns the configured capacity.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}

impl fmt::Debug for ForgettingMapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForgettingMapConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
