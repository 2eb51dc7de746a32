use super::{rectify_to_scalar, Cone};
use crate::algebra::*;
use core::marker::PhantomData;

// -------------------------------------
// Second order Cone
// -------------------------------------

/// The second-order cone `{(t, x) : ||x|| <= t}`
pub struct SecondOrderCone<T: FloatT = f64> {
    dim: usize,
    phantom: PhantomData<T>,
}

impl<T> SecondOrderCone<T>
where
    T: FloatT,
{
    pub fn new(dim: usize) -> Self {
        assert!(dim >= 2);
        Self {
            dim,
            phantom: PhantomData,
        }
    }
}

impl<T> Cone<T> for SecondOrderCone<T>
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
        // stretching the coordinates differently deforms the
        // circular cross section
        false
    }

    fn rectify_equilibration(&self, δ: &mut [T], e: &[T]) -> bool {
        rectify_to_scalar(δ, e)
    }

    fn apply_equilibration(&mut self, _e: &[T]) {
        //no auxiliary parameters
    }
}
