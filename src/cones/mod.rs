//! Cone descriptions and the scaling operations dispatched over them.
//!
//! Cones whose geometry survives anisotropic stretching (the zero cone and
//! the nonnegative orthant) accept any elementwise scaling of their slice
//! of the constraint vector.   The remaining kinds (second-order, PSD
//! triangle, exponential) only remain cones under a uniform scaling of the
//! block, and must have an elementwise candidate scaling *rectified* to a
//! single representative value.

use crate::algebra::*;
use enum_dispatch::*;

//primitive cone types
mod expcone;
mod nonnegativecone;
mod psdtrianglecone;
mod socone;
mod zerocone;

//the composite cone and the user-facing cone descriptions
mod compositecone;
mod conespec;

//flatten all cone implementations to appear in this module
pub use compositecone::*;
pub use conespec::*;
pub use expcone::*;
pub use nonnegativecone::*;
pub use psdtrianglecone::*;
pub use socone::*;
pub use zerocone::*;

#[enum_dispatch]
pub trait Cone<T>
where
    T: FloatT,
{
    /// dimension of the cone parameter (the matrix side for
    /// the PSD triangle cone)
    fn dim(&self) -> usize;

    /// number of entries the cone occupies in the constraint vector
    fn numel(&self) -> usize;

    /// true if the cone admits a different scaling factor on
    /// every entry of its block
    fn allows_elementwise_scaling(&self) -> bool;

    /// converts an elementwise scaling into a scaling that preserves
    /// cone membership, reporting whether anything was changed
    fn rectify_equilibration(&self, δ: &mut [T], e: &[T]) -> bool;

    /// propagate the final constraint scaling into any cone-internal
    /// auxiliary parameters
    fn apply_equilibration(&mut self, e: &[T]);
}

// Collapse an elementwise scaling on a block to a single representative
// value, chosen as the geometric mean so that the product of the block's
// scalings is preserved.   Writes the correction `δ = gmean(e)./e` and
// reports a change only for blocks that are not already uniform, so a
// second consecutive rectification is always a no-op.
pub(crate) fn rectify_to_scalar<T: FloatT>(δ: &mut [T], e: &[T]) -> bool {
    if is_uniform_within_roundoff(e) {
        δ.fill(T::one());
        return false;
    }
    δ.copy_from(e).recip().scale(e.gmean());
    true
}

// spreads within a few ulps count as uniform, since applying the
// correction `gmean(e)./e` itself leaves that much spread behind
fn is_uniform_within_roundoff<T: FloatT>(e: &[T]) -> bool {
    let (lo, hi) = (e.minimum(), e.maximum());
    hi - lo <= hi * T::epsilon() * (4.0).as_T()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectify_to_scalar() {
        let e: Vec<f64> = vec![1., 4., 16.];
        let mut δ = vec![0.; 3];

        assert!(rectify_to_scalar(&mut δ, &e));

        //correction collapses the block to its geometric mean
        let mut rectified = e.clone();
        rectified.hadamard(&δ);
        for &v in rectified.iter() {
            assert!((v - 4.0).abs() < 1e-12);
        }

        //a uniform block reports no change and leaves identity
        assert!(!rectify_to_scalar(&mut δ, &rectified));
        assert_eq!(δ, vec![1.; 3]);
    }
}
