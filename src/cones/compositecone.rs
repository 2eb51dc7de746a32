use super::*;
use crate::algebra::*;
use std::iter::zip;
use std::ops::Range;

// -------------------------------------
// default composite cone type
// -------------------------------------

/// An ordered product of primitive cones, partitioning the
/// constraint vector into contiguous blocks.
pub struct CompositeCone<T: FloatT = f64> {
    cones: Vec<ConeBlock<T>>,

    //overall size of the composite cone
    numel: usize,

    //ranges for the indices of the constituent cones
    pub(crate) rng_cones: Vec<Range<usize>>,
}

impl<T> CompositeCone<T>
where
    T: FloatT,
{
    pub fn new(specs: &[ConeSpec]) -> Self {
        let cones: Vec<ConeBlock<T>> = specs.iter().map(|&spec| make_cone(spec)).collect();

        let numel = cones.iter().map(|c| c.numel()).sum();
        let rng_cones = _make_rng_cones(&cones);

        Self {
            cones,
            numel,
            rng_cones,
        }
    }

    pub fn len(&self) -> usize {
        self.cones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cones.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConeBlock<T>> {
        self.cones.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ConeBlock<T>> {
        self.cones.iter_mut()
    }
}

fn _make_rng_cones<T>(cones: &[ConeBlock<T>]) -> Vec<Range<usize>>
where
    T: FloatT,
{
    let mut rngs = Vec::with_capacity(cones.len());

    if !cones.is_empty() {
        let mut start = 0;
        for cone in cones {
            let stop = start + cone.numel();
            rngs.push(start..stop);
            start = stop;
        }
    }
    rngs
}

impl<T> Cone<T> for CompositeCone<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.numel
    }

    fn numel(&self) -> usize {
        self.numel
    }

    fn allows_elementwise_scaling(&self) -> bool {
        self.cones.iter().all(|c| c.allows_elementwise_scaling())
    }

    fn rectify_equilibration(&self, δ: &mut [T], e: &[T]) -> bool {
        let mut any_changed = false;

        // we will update e <- δ .* e using return values
        // from this function.  default is to do nothing at all
        δ.fill(T::one());
        for (cone, rng) in zip(&self.cones, &self.rng_cones) {
            let δi = &mut δ[rng.clone()];
            let ei = &e[rng.clone()];
            any_changed |= cone.rectify_equilibration(δi, ei);
        }
        any_changed
    }

    fn apply_equilibration(&mut self, e: &[T]) {
        for (cone, rng) in zip(&mut self.cones, &self.rng_cones) {
            cone.apply_equilibration(&e[rng.clone()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_layout() {
        let cones = CompositeCone::<f64>::new(&[
            ConeSpec::Zero(1),
            ConeSpec::SecondOrder(3),
            ConeSpec::PSDTriangle(2),
            ConeSpec::Exponential,
        ]);

        assert_eq!(cones.len(), 4);
        assert_eq!(cones.numel(), 1 + 3 + 3 + 3);
        assert_eq!(cones.rng_cones, vec![0..1, 1..4, 4..7, 7..10]);
        assert!(!cones.allows_elementwise_scaling());

        //the PSD block's declared side is 2, occupying 3 entries
        let dims: Vec<usize> = cones.iter().map(|c| c.dim()).collect();
        assert_eq!(dims, vec![1, 3, 2, 3]);
    }

    #[test]
    fn test_rectify_equilibration() {
        let cones =
            CompositeCone::<f64>::new(&[ConeSpec::Nonnegative(2), ConeSpec::SecondOrder(2)]);

        let e = vec![3., 5., 1., 4.];
        let mut δ = vec![0.; 4];

        assert!(cones.rectify_equilibration(&mut δ, &e));

        //elementwise-scalable block is left alone
        assert_eq!(δ[0..2], [1., 1.]);

        //second order block collapses to its geometric mean
        let mut e2 = e.clone();
        e2.hadamard(&δ);
        assert!((e2[2] - 2.0).abs() < 1e-12);
        assert!((e2[3] - 2.0).abs() < 1e-12);

        //a second pass reports no change
        assert!(!cones.rectify_equilibration(&mut δ, &e2));
        assert_eq!(δ, vec![1.; 4]);
    }

    #[test]
    fn test_rectify_equilibration_no_uniform_blocks() {
        let cones = CompositeCone::<f64>::new(&[ConeSpec::Zero(2), ConeSpec::Nonnegative(2)]);

        let e = vec![3., 5., 1., 4.];
        let mut δ = vec![0.; 4];

        assert!(!cones.rectify_equilibration(&mut δ, &e));
        assert_eq!(δ, vec![1.; 4]);
    }
}
