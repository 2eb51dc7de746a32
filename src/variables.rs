use crate::algebra::*;
use crate::equilibration::Equilibration;

// ---------------
// Solver variables in standard conic form
// ---------------

/// Primal/dual/slack vectors for a problem in standard conic form.
///
/// Holds the warm-start estimate before the solve and the terminal
/// iterate after it.
pub struct Variables<T = f64> {
    /// primal variables
    pub x: Vec<T>,
    /// dual variables (in the dual cone)
    pub z: Vec<T>,
    /// slack variables (in the primal cone)
    pub s: Vec<T>,
}

impl<T> Variables<T>
where
    T: FloatT,
{
    /// Create a new `Variables` object of all zeros
    pub fn new(n: usize, m: usize) -> Self {
        let x = vec![T::zero(); n];
        let z = vec![T::zero(); m];
        let s = vec![T::zero(); m];

        Self { x, z, s }
    }

    /// Map variables given in the caller's original units into the
    /// equilibrated units of the scaled problem data.
    ///
    /// The dual transform composes the constraint-space scaling with the
    /// objective scalar, since dual feasibility couples both.
    pub fn scale(&mut self, equilibration: &Equilibration<T>) {
        self.x.hadamard(&equilibration.dinv);
        self.z.hadamard(&equilibration.einv).scale(equilibration.c);
        self.s.hadamard(&equilibration.e);
    }

    /// Map variables from equilibrated units back to the caller's
    /// original units, using the stored inverse transforms.
    pub fn unscale(&mut self, equilibration: &Equilibration<T>) {
        self.x.hadamard(&equilibration.d);
        self.z.hadamard(&equilibration.e).scale(equilibration.cinv);
        self.s.hadamard(&equilibration.einv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_unscale_inverse_pair() {
        let mut equil = Equilibration::<f64>::new(2, 3);
        equil.d = vec![2., 4.];
        equil.dinv = vec![0.5, 0.25];
        equil.e = vec![8., 1., 0.5];
        equil.einv = vec![0.125, 1., 2.];
        equil.c = 4.;
        equil.cinv = 0.25;

        let mut vars = Variables::<f64>::new(2, 3);
        vars.x = vec![1., -2.];
        vars.z = vec![3., 5., -1.];
        vars.s = vec![1., 0., 2.];

        vars.scale(&equil);
        assert_eq!(vars.x, vec![0.5, -0.5]);
        assert_eq!(vars.z, vec![1.5, 20., -8.]);
        assert_eq!(vars.s, vec![8., 0., 1.]);

        vars.unscale(&equil);
        assert_eq!(vars.x, vec![1., -2.]);
        assert_eq!(vars.z, vec![3., 5., -1.]);
        assert_eq!(vars.s, vec![1., 0., 2.]);
    }
}
