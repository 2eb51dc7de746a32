use super::{rectify_to_scalar, Cone};
use crate::algebra::*;
use core::marker::PhantomData;

// -------------------------------------
// Exponential Cone
// -------------------------------------

/// The exponential cone `cl{(x,y,z) : y e^{x/y} <= z, y > 0}`
pub struct ExponentialCone<T: FloatT = f64> {
    phantom: PhantomData<T>,
}

impl<T> ExponentialCone<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<T> Default for ExponentialCone<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cone<T> for ExponentialCone<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        3
    }

    fn numel(&self) -> usize {
        self.dim()
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
