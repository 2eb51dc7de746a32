use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn scalarop_from(&mut self, op: impl Fn(T) -> T, v: &[T]) -> &mut Self {
        for (x, v) in zip(&mut *self, v) {
            *x = op(*v);
        }
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn recip(&mut self) -> &mut Self {
        self.scalarop(T::recip)
    }

    fn rsqrt(&mut self) -> &mut Self {
        self.scalarop(|x| T::recip(T::sqrt(x)))
    }

    fn hadamard(&mut self, y: &[T]) -> &mut Self {
        zip(&mut *self, y).for_each(|(x, y)| *x *= *y);
        self
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }

    fn sum(&self) -> T {
        accumulate_pairwise(self.iter(), |&x| x)
    }

    fn mean(&self) -> T {
        if self.is_empty() {
            T::zero()
        } else {
            let num = self.sum();
            let den = T::from_usize(self.len()).unwrap();
            num / den
        }
    }

    fn gmean(&self) -> T {
        // empty product convention: the identity scaling factor
        if self.is_empty() {
            return T::one();
        }
        let logsum = accumulate_pairwise(self.iter(), |&x| x.ln());
        T::exp(logsum / T::from_usize(self.len()).unwrap())
    }

    fn minimum(&self) -> T {
        self.iter().fold(T::infinity(), |r, &s| T::min(r, s))
    }

    fn maximum(&self) -> T {
        self.iter().fold(-T::infinity(), |r, &s| T::max(r, s))
    }
}

// ---------------------------------------------------------------------
// generic pairwise accumulator utility for sums, means etc

fn accumulate_pairwise<T, I, A, F>(x: I, op: F) -> T
where
    T: FloatT,
    I: IntoIterator<Item = A> + Clone,
    I::IntoIter: ExactSizeIterator,
    F: Fn(A) -> T,
{
    const BASE_CASE_DIM: usize = 16;

    let n = x.clone().into_iter().len();
    return if n == 0 {
        T::zero()
    } else {
        accumulate_pairwise_inner(x, &op, 0, n)
    };

    fn accumulate_pairwise_inner<T, I, A, F>(x: I, op: &F, i1: usize, n: usize) -> T
    where
        T: FloatT,
        I: IntoIterator<Item = A> + Clone,
        I::IntoIter: ExactSizeIterator,
        F: Fn(A) -> T,
    {
        if n < BASE_CASE_DIM {
            x.into_iter()
                .skip(i1)
                .take(n)
                .fold(T::zero(), |acc, x| acc + op(x))
        } else {
            let n2 = n / 2;
            accumulate_pairwise_inner(x.clone(), op, i1, n2)
                + accumulate_pairwise_inner(x, op, i1 + n2, n - n2)
        }
    }
}

#[test]
fn test_sum() {
    let maxlen = 128 * 7 + 1; //awkward length to test base case
    let x: Vec<f64> = (1..=maxlen).map(|x| x as f64).collect();

    for i in 0..=x.len() {
        let z = &x[0..i];
        let sum1 = z.iter().fold(0.0, |acc, &z| acc + z);
        let sum2 = z.sum();
        assert_eq!(sum1, sum2);
    }
}

#[test]
fn test_mean() {
    let x = vec![1., 2., 3., 4., 5.];
    assert_eq!(x.mean(), 3.);
    assert_eq!(x[0..1].mean(), 1.);
    assert_eq!(x[0..0].mean(), 0.);

    //taking the mean of a huge number of f32s is inaccurate for
    //naive summation, but the pairwise method should still work
    let n = 10000000usize;
    let x = vec![1.5f32; n];
    let mean = x.mean();
    assert_eq!(mean, 1.5f32);
}

#[test]
fn test_gmean() {
    let x = vec![1., 4., 16.];
    assert!((x.gmean() - 4.0f64).abs() < 1e-14);
    assert_eq!(x[0..0].gmean(), 1.);

    //uniform data has its common value as geometric mean
    let x = vec![0.25; 100];
    assert!((x.gmean() - 0.25f64).abs() < 1e-14);
}

#[test]
fn test_rsqrt() {
    let mut x = vec![4., 0.25];
    x.rsqrt();
    assert_eq!(x, vec![0.5, 2.]);
}

#[test]
fn test_hadamard() {
    let mut x = vec![1., 2., 3.];
    x.hadamard(&[2., 0.5, -1.]);
    assert_eq!(x, vec![2., 1., -3.]);
}

#[test]
fn test_norm_inf() {
    let x = vec![1., -7., 3.];
    assert_eq!(x.norm_inf(), 7.);
    assert_eq!(x[0..0].norm_inf(), 0.);
}
