//! Typed dense channel storage.
//!
//! A channel is one named array of `nx * ny * nz` elements in canonical
//! linear order. Storage is a tagged variant per element kind, so typed access
//! is a match on the tag rather than a reinterpretation of raw bytes.

use core::fmt;
use core::str::FromStr;

use voxfield_core::Vec3;

use crate::error::GridError;

/// Element kinds a channel can store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `bool` elements.
    Bool,
    /// `i32` elements.
    Int,
    /// `f32` elements.
    Float,
    /// [`Vec3`] elements.
    Vector,
}

impl ElementKind {
    /// Every supported kind.
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Bool,
        ElementKind::Int,
        ElementKind::Float,
        ElementKind::Vector,
    ];

    /// Textual tag used by exporters and [`FromStr`].
    pub const fn tag(self) -> &'static str {
        match self {
            ElementKind::Bool => "bool",
            ElementKind::Int => "int",
            ElementKind::Float => "float",
            ElementKind::Vector => "vector3",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElementKind {
    type Err = GridError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| GridError::UnsupportedElementType {
                tag: tag.to_owned(),
            })
    }
}

/// Dense storage for one channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelData {
    /// Boolean channel.
    Bool(Vec<bool>),
    /// Integer channel.
    Int(Vec<i32>),
    /// Real channel.
    Float(Vec<f32>),
    /// Real 3-vector channel.
    Vector(Vec<Vec3>),
}

impl ChannelData {
    /// Zero-initialized storage of `len` elements.
    pub fn zeroed(kind: ElementKind, len: usize) -> Self {
        match kind {
            ElementKind::Bool => ChannelData::Bool(vec![false; len]),
            ElementKind::Int => ChannelData::Int(vec![0; len]),
            ElementKind::Float => ChannelData::Float(vec![0.0; len]),
            ElementKind::Vector => ChannelData::Vector(vec![Vec3::ZERO; len]),
        }
    }

    /// The element kind stored.
    pub fn kind(&self) -> ElementKind {
        match self {
            ChannelData::Bool(_) => ElementKind::Bool,
            ChannelData::Int(_) => ElementKind::Int,
            ChannelData::Float(_) => ElementKind::Float,
            ChannelData::Vector(_) => ElementKind::Vector,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            ChannelData::Bool(v) => v.len(),
            ChannelData::Int(v) => v.len(),
            ChannelData::Float(v) => v.len(),
            ChannelData::Vector(v) => v.len(),
        }
    }

    /// True if the channel holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at a linear offset, if in range.
    pub fn value(&self, hash: usize) -> Option<CellValue> {
        match self {
            ChannelData::Bool(v) => v.get(hash).copied().map(CellValue::Bool),
            ChannelData::Int(v) => v.get(hash).copied().map(CellValue::Int),
            ChannelData::Float(v) => v.get(hash).copied().map(CellValue::Float),
            ChannelData::Vector(v) => v.get(hash).copied().map(CellValue::Vector),
        }
    }
}

/// One element of any kind, as handed to exporters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    /// Boolean element.
    Bool(bool),
    /// Integer element.
    Int(i32),
    /// Real element.
    Float(f32),
    /// Vector element.
    Vector(Vec3),
}

impl CellValue {
    /// The element kind of this value.
    pub fn kind(&self) -> ElementKind {
        match self {
            CellValue::Bool(_) => ElementKind::Bool,
            CellValue::Int(_) => ElementKind::Int,
            CellValue::Float(_) => ElementKind::Float,
            CellValue::Vector(_) => ElementKind::Vector,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Rust types that can be stored in a channel.
///
/// Implemented for `bool`, `i32`, `f32` and [`Vec3`]; sealed so the set of
/// kinds stays closed.
pub trait Element: sealed::Sealed + Copy + Default + PartialEq + fmt::Debug + 'static {
    /// The kind tag for this type.
    const KIND: ElementKind;

    /// Borrow the typed slice if `data` stores this kind.
    fn slice(data: &ChannelData) -> Option<&[Self]>;

    /// Mutably borrow the typed slice if `data` stores this kind.
    fn slice_mut(data: &mut ChannelData) -> Option<&mut [Self]>;

    /// Wrap owned values as channel storage.
    fn into_data(values: Vec<Self>) -> ChannelData;

    /// Wrap a single value.
    fn into_cell(self) -> CellValue;
}

/// Element types with a total-enough order for range thresholds.
pub trait Numeric: Element + PartialOrd {}

macro_rules! impl_element {
    ($ty:ty, $variant:ident) => {
        impl sealed::Sealed for $ty {}

        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$variant;

            #[inline]
            fn slice(data: &ChannelData) -> Option<&[Self]> {
                match data {
                    ChannelData::$variant(v) => Some(v.as_slice()),
                    _ => None,
                }
            }

            #[inline]
            fn slice_mut(data: &mut ChannelData) -> Option<&mut [Self]> {
                match data {
                    ChannelData::$variant(v) => Some(v.as_mut_slice()),
                    _ => None,
                }
            }

            #[inline]
            fn into_data(values: Vec<Self>) -> ChannelData {
                ChannelData::$variant(values)
            }

            #[inline]
            fn into_cell(self) -> CellValue {
                CellValue::$variant(self)
            }
        }
    };
}

impl_element!(bool, Bool);
impl_element!(i32, Int);
impl_element!(f32, Float);
impl_element!(Vec3, Vector);

impl Numeric for i32 {}
impl Numeric for f32 {}
