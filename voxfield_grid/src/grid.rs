//! VoxelGrid - dense multi-channel voxel grid.
//!
//! The grid owns a fixed extent and any number of named channels, each a dense
//! array of one element kind laid out in the canonical linear order of
//! [`IndexMapper`].

use std::collections::BTreeMap;

use voxfield_core::{Extent, IndexMapper, Vec3, VoxelCoord};

use crate::channel::{ChannelData, Element, ElementKind};
use crate::config::GridConfig;
use crate::error::{GridError, Result};

/// Name of the boolean channel every grid carries from construction.
pub const BOUNDARY: &str = "Boundary";

/// Dense voxel grid with named, typed channels.
///
/// # Invariants
///
/// - Every channel holds exactly `cell_count()` elements.
/// - A [`BOUNDARY`] channel of kind `Bool` exists from construction (callers
///   may remove it; field generation then fails with `InvalidChannel`).
/// - Any operation that returns an error leaves the grid unchanged.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    config: GridConfig,
    mapper: IndexMapper,
    max_corner: Vec3,
    channels: BTreeMap<String, ChannelData>,
}

impl VoxelGrid {
    /// Create a grid with an all-false boundary channel.
    ///
    /// # Errors
    /// `InvalidCellSize` if the configuration's cell size is unusable.
    pub fn new(config: GridConfig) -> Result<Self> {
        let boundary = vec![false; config.cell_count()];
        Self::with_boundary(config, boundary)
    }

    /// Create a grid from a boundary mask in canonical linear order.
    ///
    /// # Errors
    /// - `InvalidCellSize` if the configuration's cell size is unusable
    /// - `InvalidChannelSize` if `boundary` does not have one value per cell
    pub fn with_boundary(config: GridConfig, boundary: Vec<bool>) -> Result<Self> {
        config.validate()?;
        if boundary.len() != config.cell_count() {
            return Err(GridError::InvalidChannelSize {
                expected: config.cell_count(),
                got: boundary.len(),
            });
        }

        let mut channels = BTreeMap::new();
        channels.insert(BOUNDARY.to_owned(), ChannelData::Bool(boundary));

        Ok(Self {
            config,
            mapper: IndexMapper::new(config.extent),
            max_corner: config.max_corner(),
            channels,
        })
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Get the grid configuration.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.mapper.cell_count()
    }

    /// Cells per axis.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.config.extent
    }

    /// World units per cell along each axis.
    #[inline]
    pub fn cell_size(&self) -> Vec3 {
        self.config.cell_size
    }

    /// World position of cell `(0, 0, 0)`.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.config.origin
    }

    /// World position of the far corner.
    #[inline]
    pub fn max_corner(&self) -> Vec3 {
        self.max_corner
    }

    /// The index mapper for this grid's extent.
    #[inline]
    pub fn mapper(&self) -> &IndexMapper {
        &self.mapper
    }

    /// True if `coord` addresses a cell of this grid.
    #[inline]
    pub fn is_valid(&self, coord: VoxelCoord) -> bool {
        self.mapper.is_valid(coord)
    }

    /// Linear offset of `coord`.
    #[inline]
    pub fn hash(&self, coord: VoxelCoord) -> Result<usize> {
        Ok(self.mapper.hash(coord)?)
    }

    /// Coordinate of a linear offset.
    #[inline]
    pub fn unhash(&self, hash: usize) -> Result<VoxelCoord> {
        Ok(self.mapper.unhash(hash)?)
    }

    /// World position of a cell, `origin + coord * cell_size`.
    ///
    /// Defined for any coordinate, including ones outside the grid.
    #[inline]
    pub fn to_world(&self, coord: VoxelCoord) -> Vec3 {
        self.config.origin + Vec3::from(coord).mul_elementwise(self.config.cell_size)
    }

    // ========================================================================
    // Channel management
    // ========================================================================

    /// Add a zero-initialized channel of element type `T`.
    ///
    /// An existing channel of the same name is replaced.
    pub fn add_channel<T: Element>(&mut self, name: &str) {
        self.add_channel_of_kind(name, T::KIND);
    }

    /// Add a zero-initialized channel of the given kind.
    ///
    /// An existing channel of the same name is replaced.
    pub fn add_channel_of_kind(&mut self, name: &str, kind: ElementKind) {
        let data = ChannelData::zeroed(kind, self.cell_count());
        self.install(name, data);
    }

    /// Add a zero-initialized channel from a textual kind tag.
    ///
    /// # Errors
    /// `UnsupportedElementType` if `tag` is not one of `bool`, `int`, `float`
    /// or `vector3`.
    pub fn add_channel_by_tag(&mut self, name: &str, tag: &str) -> Result<ElementKind> {
        let kind: ElementKind = tag.parse()?;
        self.add_channel_of_kind(name, kind);
        Ok(kind)
    }

    /// Install caller-supplied values as a channel.
    ///
    /// # Errors
    /// `InvalidChannelSize` if `values.len() != cell_count()`.
    pub fn insert_channel<T: Element>(&mut self, name: &str, values: Vec<T>) -> Result<()> {
        if values.len() != self.cell_count() {
            return Err(GridError::InvalidChannelSize {
                expected: self.cell_count(),
                got: values.len(),
            });
        }
        self.install(name, T::into_data(values));
        Ok(())
    }

    fn install(&mut self, name: &str, data: ChannelData) {
        let kind = data.kind();
        if let Some(old) = self.channels.insert(name.to_owned(), data) {
            log::debug!(
                "replaced channel '{}' ({} -> {}, {} cells)",
                name,
                old.kind(),
                kind,
                old.len()
            );
        }
    }

    /// Remove a channel and return its storage.
    ///
    /// # Errors
    /// `InvalidChannel` if no channel has that name.
    pub fn remove_channel(&mut self, name: &str) -> Result<ChannelData> {
        let data = self
            .channels
            .remove(name)
            .ok_or_else(|| GridError::missing(name))?;
        log::debug!("removed channel '{}' ({})", name, data.kind());
        Ok(data)
    }

    /// True if a channel with this name exists.
    #[inline]
    pub fn has_channel(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Element kind of a channel, if it exists.
    pub fn channel_kind(&self, name: &str) -> Option<ElementKind> {
        self.channels.get(name).map(ChannelData::kind)
    }

    /// Channel names in sorted order.
    pub fn channel_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.channels.keys().map(String::as_str)
    }

    /// Number of channels.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Untyped storage of a channel.
    pub fn channel_data(&self, name: &str) -> Result<&ChannelData> {
        self.channels.get(name).ok_or_else(|| GridError::missing(name))
    }

    pub(crate) fn raw_channel(&self, name: &str) -> Option<(&str, &ChannelData)> {
        self.channels
            .get_key_value(name)
            .map(|(name, data)| (name.as_str(), data))
    }

    pub(crate) fn raw_channels(&self) -> impl Iterator<Item = (&str, &ChannelData)> + '_ {
        self.channels.iter().map(|(name, data)| (name.as_str(), data))
    }

    // ========================================================================
    // Typed access
    // ========================================================================

    /// Borrow a channel as a typed slice in canonical linear order.
    ///
    /// # Errors
    /// `InvalidChannel` if the channel is missing or stores another kind.
    pub fn channel<T: Element>(&self, name: &str) -> Result<&[T]> {
        let data = self.channel_data(name)?;
        T::slice(data).ok_or_else(|| GridError::kind_mismatch(name, T::KIND, data.kind()))
    }

    /// Mutably borrow a channel as a typed slice.
    ///
    /// # Errors
    /// `InvalidChannel` if the channel is missing or stores another kind.
    pub fn channel_mut<T: Element>(&mut self, name: &str) -> Result<&mut [T]> {
        let data = self
            .channels
            .get_mut(name)
            .ok_or_else(|| GridError::missing(name))?;
        let found = data.kind();
        T::slice_mut(data).ok_or_else(|| GridError::kind_mismatch(name, T::KIND, found))
    }

    /// Read one cell.
    ///
    /// # Errors
    /// - `InvalidChannel` if the channel is missing or stores another kind
    /// - `IndexOutOfRange` if `coord` is outside the grid
    pub fn get<T: Element>(&self, name: &str, coord: VoxelCoord) -> Result<T> {
        let values = self.channel::<T>(name)?;
        let hash = self.mapper.hash(coord)?;
        Ok(values[hash])
    }

    /// Write one cell.
    ///
    /// # Errors
    /// - `InvalidChannel` if the channel is missing or stores another kind
    /// - `IndexOutOfRange` if `coord` is outside the grid
    pub fn set<T: Element>(&mut self, name: &str, coord: VoxelCoord, value: T) -> Result<()> {
        let hash = self.mapper.hash(coord);
        let values = self.channel_mut::<T>(name)?;
        values[hash?] = value;
        Ok(())
    }

    /// Read one cell by linear offset.
    ///
    /// # Errors
    /// - `InvalidChannel` if the channel is missing or stores another kind
    /// - `IndexOutOfRange` if `hash >= cell_count()`
    pub fn get_by_hash<T: Element>(&self, name: &str, hash: usize) -> Result<T> {
        let values = self.channel::<T>(name)?;
        values.get(hash).copied().ok_or_else(|| self.hash_error(hash))
    }

    /// Write one cell by linear offset.
    ///
    /// # Errors
    /// - `InvalidChannel` if the channel is missing or stores another kind
    /// - `IndexOutOfRange` if `hash >= cell_count()`
    pub fn set_by_hash<T: Element>(&mut self, name: &str, hash: usize, value: T) -> Result<()> {
        let err = self.hash_error(hash);
        let slot = self
            .channel_mut::<T>(name)?
            .get_mut(hash)
            .ok_or(err)?;
        *slot = value;
        Ok(())
    }

    fn hash_error(&self, hash: usize) -> GridError {
        GridError::IndexOutOfRange(voxfield_core::CoreError::HashOutOfRange {
            hash,
            cell_count: self.cell_count(),
        })
    }

    /// Number of boundary cells, or `InvalidChannel` if the boundary channel
    /// has been removed or replaced with another kind.
    pub fn boundary_count(&self) -> Result<usize> {
        Ok(self.channel::<bool>(BOUNDARY)?.iter().filter(|&&b| b).count())
    }
}
