use super::Cone;
use crate::algebra::*;
use core::marker::PhantomData;

// -------------------------------------
// Nonnegative Cone
// -------------------------------------

/// The nonnegative orthant
pub struct NonnegativeCone<T: FloatT = f64> {
    dim: usize,
    phantom: PhantomData<T>,
}

impl<T> NonnegativeCone<T>
where
    T: FloatT,
{
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            phantom: PhantomData,
        }
    }
}

impl<T> Cone<T> for NonnegativeCone<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn numel(&self) -> usize {
        self.dim()
    }

    fn allows_elementwise_scaling(&self) -> bool {
        true
    }

    fn rectify_equilibration(&self, δ: &mut [T], _e: &[T]) -> bool {
        δ.fill(T::one());
        false
    }

    fn apply_equilibration(&mut self, _e: &[T]) {
        //no auxiliary parameters
    }
}
