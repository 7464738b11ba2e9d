//! Core types for voxfield grids.
//!
//! Provides voxel coordinates, axes and the real 3-vector used for world-space
//! positions and vector channels.

use core::ops::{Add, Mul, Neg, Sub};

/// A real 3-vector with named fields.
///
/// Used for world positions, cell sizes and the elements of vector channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::splat(0.0);

    /// Create a new Vec3.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a Vec3 with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Component-wise product.
    #[inline]
    pub fn mul_elementwise(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.length_squared())
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// True if every component is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.as_array()
    }
}

impl From<VoxelCoord> for Vec3 {
    #[inline]
    fn from(c: VoxelCoord) -> Self {
        Self {
            x: c.x as f32,
            y: c.y as f32,
            z: c.z as f32,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

/// Integer voxel index `(i, j, k)`.
///
/// Signed so that out-of-range requests such as `(-1, 0, 0)` can be expressed
/// and rejected rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct VoxelCoord {
    /// First axis index (varies slowest in linear order).
    pub x: i32,
    /// Second axis index.
    pub y: i32,
    /// Third axis index (varies fastest in linear order).
    pub z: i32,
}

impl VoxelCoord {
    /// Create a new VoxelCoord.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component along an axis.
    #[inline]
    pub const fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy with the component along `axis` replaced.
    #[inline]
    pub const fn with(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::X => Self::new(value, self.y, self.z),
            Axis::Y => Self::new(self.x, value, self.z),
            Axis::Z => Self::new(self.x, self.y, value),
        }
    }

    /// Step `delta` cells along `axis`, without bounds checking.
    #[inline]
    pub const fn step(self, axis: Axis, delta: i32) -> Self {
        self.with(axis, self.get(axis) + delta)
    }
}

impl From<[i32; 3]> for VoxelCoord {
    #[inline]
    fn from(arr: [i32; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl From<VoxelCoord> for [i32; 3] {
    #[inline]
    fn from(c: VoxelCoord) -> Self {
        c.as_array()
    }
}

/// One of the three grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First axis (`i`).
    X,
    /// Second axis (`j`).
    Y,
    /// Third axis (`k`).
    Z,
}

impl Axis {
    /// All axes in tie-breaking order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in a coordinate triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}
