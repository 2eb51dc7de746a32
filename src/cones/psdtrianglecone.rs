use super::{rectify_to_scalar, Cone};
use crate::algebra::*;
use core::marker::PhantomData;

// -------------------------------------
// Positive Semidefinite Cone (Scaled triangular form)
// -------------------------------------

/// The PSD cone of matrix side `n`, in scaled upper-triangular
/// vectorization of length `n(n+1)/2`
pub struct PSDTriangleCone<T: FloatT = f64> {
    n: usize,
    numel: usize,
    phantom: PhantomData<T>,
}

impl<T> PSDTriangleCone<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        Self {
            n,
            numel: triangular_number(n),
            phantom: PhantomData,
        }
    }
}

impl<T> Cone<T> for PSDTriangleCone<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.n
    }

    fn numel(&self) -> usize {
        self.numel
    }

    fn allows_elementwise_scaling(&self) -> bool {
        false
    }

    fn rectify_equilibration(&self, δ: &mut [T], e: &[T]) -> bool {
        rectify_to_scalar(δ, e)
    }

    fn apply_equilibration(&mut self, _e: &[T]) {
        //no auxiliary parameters
    }
}
