#![forbid(unsafe_code)]

//! Registration of mounted grids and freestanding drag sources.
//!
//! Grids are kept in registration order, which is also hit-testing order:
//! when grids overlap, the first registered grid containing the pointer wins
//! enter/leave resolution. Grid registration is strict — registering a grid
//! twice or unregistering an unknown one is a lifecycle bug in the host glue
//! and surfaces as an error. Source registration is lenient: duplicates are
//! ignored and unknown removals are no-ops.

use std::fmt;

/// Stable identifier for a mounted grid.
///
/// `0` is reserved/invalid so ids are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridId(u64);

impl GridId {
    /// Lowest valid grid id.
    pub const MIN: Self = Self(1);

    /// Create a grid id, rejecting 0.
    pub fn new(raw: u64) -> Result<Self, RegistryError> {
        if raw == 0 {
            return Err(RegistryError::ZeroGridId);
        }
        Ok(Self(raw))
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Stable identifier for a registered drag source.
///
/// `0` is reserved/invalid, matching [`GridId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId(u64);

impl SourceId {
    /// Lowest valid source id.
    pub const MIN: Self = Self(1);

    /// Create a source id, rejecting 0.
    pub fn new(raw: u64) -> Result<Self, RegistryError> {
        if raw == 0 {
            return Err(RegistryError::ZeroSourceId);
        }
        Ok(Self(raw))
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Lifecycle errors raised by [`GridRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    ZeroGridId,
    ZeroSourceId,
    GridAlreadyRegistered { id: GridId },
    UnknownGrid { id: GridId },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGridId => write!(f, "grid id 0 is invalid"),
            Self::ZeroSourceId => write!(f, "source id 0 is invalid"),
            Self::GridAlreadyRegistered { id } => {
                write!(f, "grid {} already registered", id.0)
            }
            Self::UnknownGrid { id } => write!(f, "grid {} not registered", id.0),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Mints monotonically increasing grid and source ids for one stage.
#[derive(Debug, Clone)]
pub struct IdMinter {
    next_grid: u64,
    next_source: u64,
}

impl IdMinter {
    /// Start both counters at the lowest valid id.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_grid: GridId::MIN.0,
            next_source: SourceId::MIN.0,
        }
    }

    /// Mint the next grid id.
    pub fn next_grid(&mut self) -> GridId {
        let id = GridId(self.next_grid);
        self.next_grid += 1;
        id
    }

    /// Mint the next source id.
    pub fn next_source(&mut self) -> SourceId {
        let id = SourceId(self.next_source);
        self.next_source += 1;
        id
    }
}

impl Default for IdMinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered set of mounted grids plus the registered drag sources.
#[derive(Debug, Clone, Default)]
pub struct GridRegistry {
    grids: Vec<GridId>,
    sources: Vec<SourceId>,
}

impl GridRegistry {
    /// Empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grids: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// Register a grid. Must be called exactly once per mounted grid.
    pub fn register_grid(&mut self, id: GridId) -> Result<(), RegistryError> {
        if self.grids.contains(&id) {
            return Err(RegistryError::GridAlreadyRegistered { id });
        }
        self.grids.push(id);
        Ok(())
    }

    /// Unregister a grid previously registered.
    pub fn unregister_grid(&mut self, id: GridId) -> Result<(), RegistryError> {
        let Some(index) = self.grids.iter().position(|g| *g == id) else {
            return Err(RegistryError::UnknownGrid { id });
        };
        self.grids.remove(index);
        Ok(())
    }

    /// Registered grids in registration (hit-testing) order.
    #[must_use]
    pub fn grids(&self) -> &[GridId] {
        &self.grids
    }

    /// Whether `id` is currently registered.
    #[must_use]
    pub fn contains_grid(&self, id: GridId) -> bool {
        self.grids.contains(&id)
    }

    /// Register a drag source. Duplicates are ignored.
    pub fn register_source(&mut self, id: SourceId) {
        if !self.sources.contains(&id) {
            self.sources.push(id);
        }
    }

    /// Remove a drag source. Unknown ids are ignored.
    pub fn unregister_source(&mut self, id: SourceId) {
        self.sources.retain(|s| *s != id);
    }

    /// Whether `id` is a registered drag source.
    #[must_use]
    pub fn contains_source(&self, id: SourceId) -> bool {
        self.sources.contains(&id)
    }

    /// Registered drag sources in registration order.
    #[must_use]
    pub fn sources(&self) -> &[SourceId] {
        &self.sources
    }
}
