//! The equality used by `includes`.

use crate::values::Value;
use crate::{String, Vec};

/// Equality under which `NaN` equals `NaN` and `+0` equals `-0`.
///
/// Everything that is not a floating point number compares with its ordinary
/// equality. Ordinary `==` on floats would never find a `NaN`.
///
/// ```
/// use seqkit_core::ops::SameValueZero;
///
/// assert!(f64::NAN.same_value_zero(&f64::NAN));
/// assert!(0.0_f64.same_value_zero(&-0.0));
/// assert!(!1.0_f64.same_value_zero(&2.0));
/// assert!("a".same_value_zero("a"));
/// ```
pub trait SameValueZero<Rhs: ?Sized = Self> {
    fn same_value_zero(&self, other: &Rhs) -> bool;
}

macro_rules! same_value_zero_float {
    ($($ty:ty),*) => {$(
        impl SameValueZero for $ty {
            #[inline]
            fn same_value_zero(&self, other: &Self) -> bool {
                self == other || (self.is_nan() && other.is_nan())
            }
        }
    )*};
}

macro_rules! same_value_zero_eq {
    ($($ty:ty),*) => {$(
        impl SameValueZero for $ty {
            #[inline]
            fn same_value_zero(&self, other: &Self) -> bool {
                self == other
            }
        }
    )*};
}

same_value_zero_float!(f32, f64);
same_value_zero_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), str, String
);

impl SameValueZero<str> for String {
    fn same_value_zero(&self, other: &str) -> bool {
        self == other
    }
}

impl SameValueZero<String> for str {
    fn same_value_zero(&self, other: &String) -> bool {
        self == other
    }
}

impl<'b, A, B> SameValueZero<&'b B> for &A
where
    A: ?Sized + SameValueZero<B>,
    B: ?Sized,
{
    #[inline]
    fn same_value_zero(&self, other: &&'b B) -> bool {
        (**self).same_value_zero(*other)
    }
}

impl<A, B> SameValueZero<Option<B>> for Option<A>
where
    A: SameValueZero<B>,
{
    fn same_value_zero(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_value_zero(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A, B> SameValueZero<[B]> for [A]
where
    A: SameValueZero<B>,
{
    fn same_value_zero(&self, other: &[B]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same_value_zero(b))
    }
}

impl<A, B> SameValueZero<Vec<B>> for Vec<A>
where
    A: SameValueZero<B>,
{
    fn same_value_zero(&self, other: &Vec<B>) -> bool {
        self.as_slice().same_value_zero(other.as_slice())
    }
}

/// Arrays, records and functions compare by identity.
impl<'a> SameValueZero for Value<'a> {
    fn same_value_zero(&self, other: &Self) -> bool {
        Value::same_value_zero(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_same_value_zero() {
        assert!(f64::NAN.same_value_zero(&f64::NAN));
        assert!(f32::NAN.same_value_zero(&f32::NAN));
        // Ordinary equality disagrees
        let (a, b) = core::hint::black_box((f64::NAN, f64::NAN));
        assert!(a != b);
    }

    #[test]
    fn test_signed_zero() {
        assert!(0.0_f64.same_value_zero(&-0.0));
        assert!((-0.0_f32).same_value_zero(&0.0));
    }

    #[test]
    fn test_strings() {
        let owned = String::from("apple");
        assert!(owned.same_value_zero("apple"));
        assert!("apple".same_value_zero(&owned));
        assert!(!owned.same_value_zero(&String::from("pear")));
    }

    #[test]
    fn test_nested() {
        assert!(Some(f64::NAN).same_value_zero(&Some(f64::NAN)));
        assert!(!Some(1.0).same_value_zero(&None::<f64>));
        let a = Vec::from([1.0, f64::NAN]);
        let b = Vec::from([1.0, f64::NAN]);
        assert!(a.same_value_zero(&b));
        assert!(!a.same_value_zero(&Vec::from([1.0])));
    }

    #[test]
    fn test_value_identity() {
        let arena = bumpalo::Bump::new();
        let first = Value::array(&arena, &[Value::number(1.0)]);
        let second = Value::array(&arena, &[Value::number(1.0)]);
        assert!(first.same_value_zero(&first));
        assert!(!first.same_value_zero(&second));
        assert!(Value::number(f64::NAN).same_value_zero(&Value::number(f64::NAN)));
        assert!(Value::Undefined.same_value_zero(&Value::Undefined));
        assert!(!Value::Undefined.same_value_zero(&Value::Null));
    }
}
