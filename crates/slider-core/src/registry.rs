//! Which host elements already carry a drawing surface, and how big it is.
//!
//! Several sliders may share one surface per host. The first claim creates
//! the record; later claims reuse it and only ever grow it.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRecord {
    pub size: f64,
    pub sliders: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceClaim {
    Created { size: f64 },
    Reused { size: f64, grew: bool },
}

impl SurfaceClaim {
    #[inline]
    pub fn size(&self) -> f64 {
        match *self {
            SurfaceClaim::Created { size } | SurfaceClaim::Reused { size, .. } => size,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceRelease {
    Remaining(usize),
    Emptied,
    Unknown,
}

#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: FnvHashMap<HostId, SurfaceRecord>,
    next_id: u32,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh identity for a host seen for the first time.
    pub fn allocate_host(&mut self) -> HostId {
        let id = HostId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn claim(&mut self, host: HostId, required_size: f64) -> SurfaceClaim {
        match self.surfaces.get_mut(&host) {
            Some(record) => {
                record.sliders += 1;
                let grew = required_size > record.size;
                if grew {
                    log::debug!(
                        "[surface] host {:?} grows {} -> {}",
                        host,
                        record.size,
                        required_size
                    );
                    record.size = required_size;
                }
                SurfaceClaim::Reused {
                    size: record.size,
                    grew,
                }
            }
            None => {
                self.surfaces.insert(
                    host,
                    SurfaceRecord {
                        size: required_size,
                        sliders: 1,
                    },
                );
                SurfaceClaim::Created {
                    size: required_size,
                }
            }
        }
    }

    /// Drop one slider from a host. The size is kept while any slider
    /// remains; the record goes away with the last one.
    pub fn release(&mut self, host: HostId) -> SurfaceRelease {
        let Some(record) = self.surfaces.get_mut(&host) else {
            return SurfaceRelease::Unknown;
        };
        record.sliders = record.sliders.saturating_sub(1);
        if record.sliders == 0 {
            self.surfaces.remove(&host);
            SurfaceRelease::Emptied
        } else {
            SurfaceRelease::Remaining(record.sliders)
        }
    }

    #[inline]
    pub fn get(&self, host: HostId) -> Option<&SurfaceRecord> {
        self.surfaces.get(&host)
    }

    #[inline]
    pub fn is_initialized(&self, host: HostId) -> bool {
        self.surfaces.contains_key(&host)
    }
}

/// Owned entries addressed by a slot number, kept until explicitly removed.
///
/// Mounted sliders live here so they keep reacting to pointer input after
/// the script that created them has dropped its handle.
#[derive(Debug)]
pub struct MountTable<T> {
    entries: FnvHashMap<u32, T>,
    next_slot: u32,
}

impl<T> Default for MountTable<T> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
            next_slot: 0,
        }
    }
}

impl<T> MountTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: T) -> u32 {
        let slot = self.next_slot;
        self.next_slot = self.next_slot.wrapping_add(1);
        self.entries.insert(slot, entry);
        slot
    }

    #[inline]
    pub fn get(&self, slot: u32) -> Option<&T> {
        self.entries.get(&slot)
    }

    pub fn remove(&mut self, slot: u32) -> Option<T> {
        self.entries.remove(&slot)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
