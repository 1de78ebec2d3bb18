//! Promotion of numeric arguments to a common inexact (floating point) type
//!
//! Integers are mapped to the smallest float that holds their range without
//! loss: 8 and 16 bit integers become `f32`, wider ones `f64`. Two floats join
//! to the wider of the pair.
use crate::util;
use ndarray::ArrayBase;
use ndarray::ArrayD;
use ndarray::Data;
use ndarray::Dimension;
use ndarray::ShapeError;
use ndarray::Zip;
use num::Float;

/// Element types with an inexact counterpart
pub trait Inexact: Copy {
    type Float: Float;

    fn to_inexact(self) -> Self::Float;
}

macro_rules! impl_inexact {
    ($float:ty => $($t:ty),*) => {
        $(
            impl Inexact for $t {
                type Float = $float;

                #[inline]
                fn to_inexact(self) -> $float {
                    self as $float
                }
            }
        )*
    };
}

impl_inexact!(f32 => f32, i8, i16, u8, u16);
impl_inexact!(f64 => f64, i32, i64, u32, u64, isize, usize);

/// Join of two float types
pub trait CommonFloat<Rhs: Float>: Float {
    type Joined: Float;

    fn widen_lhs(self) -> Self::Joined;
    fn widen_rhs(rhs: Rhs) -> Self::Joined;
}

macro_rules! impl_common_float {
    ($($lhs:ty, $rhs:ty => $out:ty);*) => {
        $(
            impl CommonFloat<$rhs> for $lhs {
                type Joined = $out;

                #[inline]
                fn widen_lhs(self) -> $out {
                    self as $out
                }

                #[inline]
                fn widen_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

impl_common_float!(
    f32, f32 => f32;
    f32, f64 => f64;
    f64, f32 => f64;
    f64, f64 => f64
);

/// Pairs of element types that promote to one common float `Output`
pub trait PromoteInexact<Rhs>: Copy {
    type Output: Float;

    fn promote(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

impl<A, B> PromoteInexact<B> for A
where
    A: Inexact,
    B: Inexact,
    A::Float: CommonFloat<B::Float>,
{
    type Output = <A::Float as CommonFloat<B::Float>>::Joined;

    #[inline]
    fn promote(self, rhs: B) -> (Self::Output, Self::Output) {
        (
            <A::Float as CommonFloat<B::Float>>::widen_lhs(self.to_inexact()),
            <A::Float as CommonFloat<B::Float>>::widen_rhs(rhs.to_inexact()),
        )
    }
}

/// Broadcasts `x` and `p` together and converts both to their common float type.
pub fn promote_args_inexact<A, B, S1, S2, D1, D2>(
    x: &ArrayBase<S1, D1>,
    p: &ArrayBase<S2, D2>,
) -> Result<(ArrayD<A::Output>, ArrayD<A::Output>), ShapeError>
where
    A: PromoteInexact<B>,
    B: Copy,
    S1: Data<Elem = A>,
    S2: Data<Elem = B>,
    D1: Dimension,
    D2: Dimension,
{
    let (x, p) = util::broadcast_pair(x, p)?;
    let mut px = ArrayD::zeros(x.raw_dim());
    let mut pp = ArrayD::zeros(p.raw_dim());
    Zip::from(&mut px)
        .and(&mut pp)
        .and(&x)
        .and(&p)
        .for_each(|px, pp, &x, &p| {
            let (x, p) = x.promote(p);
            *px = x;
            *pp = p;
        });
    Ok((px, pp))
}
