//! Channel queries: thresholds into boolean masks and coordinate collection.

use voxfield_core::{IndexMapper, VoxelCoord};

use crate::channel::{Element, Numeric};
use crate::error::Result;
use crate::grid::VoxelGrid;

/// Lazy, restartable view over the coordinates whose value satisfies a
/// predicate.
///
/// Each call to [`iter`](Self::iter) walks the source channel from the start in
/// canonical linear order. The view borrows the grid, so the channel cannot
/// change while it is alive.
pub struct CoordQuery<'a, T, F> {
    mapper: IndexMapper,
    values: &'a [T],
    predicate: F,
}

impl<'a, T, F> CoordQuery<'a, T, F>
where
    T: Element,
    F: Fn(&T) -> bool,
{
    /// Iterate matching coordinates in canonical linear order.
    pub fn iter(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(move |(_, v)| (self.predicate)(v))
            .map(move |(h, _)| self.mapper.unhash_unchecked(h))
    }

    /// Number of matching cells.
    pub fn count(&self) -> usize {
        self.values.iter().filter(|v| (self.predicate)(v)).count()
    }

    /// Collect matching coordinates.
    pub fn to_vec(&self) -> Vec<VoxelCoord> {
        self.iter().collect()
    }
}

impl VoxelGrid {
    /// Write `low <= v <= high` of a numeric channel into a boolean channel.
    ///
    /// The destination is created, or replaced if it exists. Returns the number
    /// of cells set to true.
    ///
    /// # Errors
    /// `InvalidChannel` if `source` is missing or not of type `T`. The
    /// destination is not touched in that case.
    pub fn threshold_to_bool<T: Numeric>(
        &mut self,
        source: &str,
        dest: &str,
        low: T,
        high: T,
    ) -> Result<usize> {
        self.predicate_to_bool::<T, _>(source, dest, |v| low <= *v && *v <= high)
    }

    /// Write an arbitrary per-cell predicate of a channel into a boolean
    /// channel.
    ///
    /// `source` and `dest` may name the same channel only if it is boolean; the
    /// destination is replaced after the source has been read.
    ///
    /// # Errors
    /// `InvalidChannel` if `source` is missing or not of type `T`.
    pub fn predicate_to_bool<T, F>(&mut self, source: &str, dest: &str, mut predicate: F) -> Result<usize>
    where
        T: Element,
        F: FnMut(&T) -> bool,
    {
        let mask: Vec<bool> = self
            .channel::<T>(source)?
            .iter()
            .map(|v| predicate(v))
            .collect();
        let count = mask.iter().filter(|&&b| b).count();
        self.insert_channel(dest, mask)?;
        Ok(count)
    }

    /// Query the coordinates of a channel whose value satisfies `predicate`.
    ///
    /// # Errors
    /// `InvalidChannel` if `source` is missing or not of type `T`.
    pub fn collect_coords<T, F>(&self, source: &str, predicate: F) -> Result<CoordQuery<'_, T, F>>
    where
        T: Element,
        F: Fn(&T) -> bool,
    {
        Ok(CoordQuery {
            mapper: *self.mapper(),
            values: self.channel::<T>(source)?,
            predicate,
        })
    }

    /// Collect the coordinates of a channel whose value satisfies `predicate`.
    ///
    /// # Errors
    /// `InvalidChannel` if `source` is missing or not of type `T`.
    pub fn collect_coordinates<T, F>(&self, source: &str, predicate: F) -> Result<Vec<VoxelCoord>>
    where
        T: Element,
        F: Fn(&T) -> bool,
    {
        Ok(self.collect_coords(source, predicate)?.to_vec())
    }
}
