use super::{FloatT, ScalarMath};

impl<T: FloatT> ScalarMath for T {
    type T = T;
    fn clip(&self, minval: T, maxval: T) -> T {
        if *self < minval {
            minval
        } else if *self > maxval {
            maxval
        } else {
            *self
        }
    }
}

pub(crate) fn triangular_number(k: usize) -> usize {
    (k * (k + 1)) >> 1
}

#[test]
fn test_clip() {
    assert_eq!((0.5).clip(1., 2.), 1.);
    assert_eq!((1.5).clip(1., 2.), 1.5);
    assert_eq!((2.5).clip(1., 2.), 2.);
}

#[test]
fn test_triangular_number() {
    assert_eq!(triangular_number(1), 1);
    assert_eq!(triangular_number(3), 6);
    assert_eq!(triangular_number(6), 21);
}
