//! Named vector axes and the capability traits for reading them.

use anyhow::{Result, anyhow};
use std::fmt;

/// One of the (at most four) named axes of a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

/// Read access to the x- and y-components of a vector.
///
/// This is the minimal capability required to swizzle a vector. It is
/// implemented by every vector with at least two components.
pub trait AxesXY {
    /// The x-component.
    fn x(&self) -> f64;

    /// The y-component.
    fn y(&self) -> f64;
}

/// Read access to the z-component in addition to the x- and y-components.
pub trait AxesXYZ: AxesXY {
    /// The z-component.
    fn z(&self) -> f64;
}

/// Read access to all four components of a vector.
pub trait AxesXYZW: AxesXYZ {
    /// The w-component.
    fn w(&self) -> f64;
}

impl Axis {
    /// All axes, in index order.
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Z, Self::W];

    /// The component index of the axis.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
            Self::W => 3,
        }
    }

    /// Returns the axis with the given component index in a vector with
    /// `dimension` components.
    ///
    /// # Errors
    /// If the index is not smaller than the dimension, or the dimension
    /// exceeds four.
    pub fn try_from_index(index: usize, dimension: usize) -> Result<Self> {
        if index >= dimension {
            return Err(anyhow!(
                "Invalid axis index {index} for vector with {dimension} components"
            ));
        }
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| anyhow!("No named axis with index {index}"))
    }

    /// The lowercase name of the axis.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::W => "w",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn axes_to_string(axes: &[Axis]) -> String {
    axes.iter().map(|axis| axis.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_indices_follow_component_order() {
        for (index, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), index);
        }
    }

    #[test]
    fn converting_valid_index_gives_axis() {
        assert_eq!(Axis::try_from_index(0, 2).unwrap(), Axis::X);
        assert_eq!(Axis::try_from_index(2, 3).unwrap(), Axis::Z);
        assert_eq!(Axis::try_from_index(3, 4).unwrap(), Axis::W);
    }

    #[test]
    fn converting_index_outside_dimension_fails() {
        assert!(Axis::try_from_index(2, 2).is_err());
        assert!(Axis::try_from_index(4, 4).is_err());
        assert!(Axis::try_from_index(4, 5).is_err());
    }

    #[test]
    fn axes_are_displayed_by_name() {
        assert_eq!(Axis::Z.to_string(), "z");
        assert_eq!(axes_to_string(&[Axis::Y, Axis::X, Axis::X]), "yxx");
    }
}
