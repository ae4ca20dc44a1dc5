//! Utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands. The body receives both operands by reference. The
/// generated impls are generic over every supported dimension `N`.
macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, const N: usize> ::std::ops::$op<&'a $tr> for &'a $tl
        where
            $crate::vector::Dim<N>: $crate::vector::SupportedDim,
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<const N: usize> ::std::ops::$op<$tr> for &$tl
        where
            $crate::vector::Dim<N>: $crate::vector::SupportedDim,
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, const N: usize> ::std::ops::$op<&'a $tr> for $tl
        where
            $crate::vector::Dim<N>: $crate::vector::SupportedDim,
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<const N: usize> ::std::ops::$op<$tr> for $tl
        where
            $crate::vector::Dim<N>: $crate::vector::SupportedDim,
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<const N: usize> ::std::ops::$op for &$t
        where
            $crate::vector::Dim<N>: $crate::vector::SupportedDim,
        {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<const N: usize> ::std::ops::$op for $t
        where
            $crate::vector::Dim<N>: $crate::vector::SupportedDim,
        {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<const N: usize> ::std::ops::$op<&$tr> for $tl
        where
            $crate::vector::Dim<N>: $crate::vector::SupportedDim,
        {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<const N: usize> ::std::ops::$op<$tr> for $tl
        where
            $crate::vector::Dim<N>: $crate::vector::SupportedDim,
        {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

/// Implements the axis capability traits for the 2-, 3- and 4-dimensional
/// versions of a vector type, using the given expression to read the
/// component with a given index.
macro_rules! impl_axes {
    ($ty:ident, |$this:ident, $idx:ident| $get:expr) => {
        impl_axes!(@single $ty, $this, $idx, $get, AxesXY, [x => 0, y => 1], 2);
        impl_axes!(@single $ty, $this, $idx, $get, AxesXY, [x => 0, y => 1], 3);
        impl_axes!(@single $ty, $this, $idx, $get, AxesXY, [x => 0, y => 1], 4);
        impl_axes!(@single $ty, $this, $idx, $get, AxesXYZ, [z => 2], 3);
        impl_axes!(@single $ty, $this, $idx, $get, AxesXYZ, [z => 2], 4);
        impl_axes!(@single $ty, $this, $idx, $get, AxesXYZW, [w => 3], 4);
    };
    (@single $ty:ident, $this:ident, $idx:ident, $get:expr, $trait:ident, [$($axis:ident => $axis_idx:literal),+], $dim:literal) => {
        impl $crate::axis::$trait for $ty<$dim> {
            $(
                #[inline]
                fn $axis(&self) -> f64 {
                    let $this = self;
                    let $idx: usize = $axis_idx;
                    $get
                }
            )+
        }
    };
}
