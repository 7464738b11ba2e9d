//! Read-only channel views for external exporters.
//!
//! Exporters (image stacks, point clouds, meshes) receive a [`ChannelView`]
//! per channel. A view carries everything needed to place values in world
//! space without access to the grid itself.

use voxfield_core::{Extent, IndexMapper, Vec3, VoxelCoord};

use crate::channel::{CellValue, ChannelData, ElementKind};
use crate::error::{GridError, Result};
use crate::grid::VoxelGrid;

/// Borrowed view of one channel plus the grid geometry.
#[derive(Debug, Clone, Copy)]
pub struct ChannelView<'a> {
    name: &'a str,
    data: &'a ChannelData,
    mapper: IndexMapper,
    cell_size: Vec3,
    origin: Vec3,
}

impl<'a> ChannelView<'a> {
    /// Channel name.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Element kind.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.data.kind()
    }

    /// Textual element tag (`bool`, `int`, `float` or `vector3`).
    #[inline]
    pub fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// Grid extent.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.mapper.extent()
    }

    /// World units per cell.
    #[inline]
    pub fn cell_size(&self) -> Vec3 {
        self.cell_size
    }

    /// World position of cell `(0, 0, 0)`.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the channel holds no elements (never the case for a grid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw storage in canonical linear order.
    #[inline]
    pub fn data(&self) -> &'a ChannelData {
        self.data
    }

    /// Value of one cell, or `None` outside the grid.
    pub fn value(&self, coord: VoxelCoord) -> Option<CellValue> {
        let hash = self.mapper.hash(coord).ok()?;
        self.data.value(hash)
    }

    /// Every cell with its value, in canonical linear order.
    pub fn cells(&self) -> impl Iterator<Item = (VoxelCoord, CellValue)> + 'a {
        let mapper = self.mapper;
        let data = self.data;
        (0..data.len()).filter_map(move |h| {
            data.value(h)
                .map(|value| (mapper.unhash_unchecked(h), value))
        })
    }
}

/// Sink for channel views.
pub trait ChannelExporter {
    /// Error produced by the sink.
    type Error;

    /// Export one channel.
    fn export(&mut self, view: &ChannelView<'_>) -> std::result::Result<(), Self::Error>;
}

impl VoxelGrid {
    /// View one channel for export.
    ///
    /// # Errors
    /// `InvalidChannel` if no channel has that name.
    pub fn channel_view(&self, name: &str) -> Result<ChannelView<'_>> {
        let (name, data) = self
            .raw_channel(name)
            .ok_or_else(|| GridError::missing(name))?;
        Ok(self.view(name, data))
    }

    /// Views of all channels in name order.
    pub fn channels(&self) -> impl Iterator<Item = ChannelView<'_>> + '_ {
        self.raw_channels().map(move |(name, data)| self.view(name, data))
    }

    /// Hand every channel to `exporter` in name order, stopping at the first
    /// error.
    pub fn export_all<E: ChannelExporter>(&self, exporter: &mut E) -> std::result::Result<usize, E::Error> {
        let mut exported = 0;
        for view in self.channels() {
            exporter.export(&view)?;
            exported += 1;
        }
        Ok(exported)
    }

    fn view<'a>(&'a self, name: &'a str, data: &'a ChannelData) -> ChannelView<'a> {
        ChannelView {
            name,
            data,
            mapper: *self.mapper(),
            cell_size: self.cell_size(),
            origin: self.origin(),
        }
    }
}
