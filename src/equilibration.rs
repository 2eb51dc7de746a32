use crate::algebra::FloatT;

// ---------------
// equilibration data
// ---------------

/// Data from the Ruiz equilibration procedure
///
/// The fields `d`,`e`,`dinv`,`einv` are vectors of scaling values to be
/// treated as diagonal scaling data, mapping the problem data between the
/// caller's original units and the equilibrated units.  The inverses are
/// stored explicitly so that the reverse transform applies exactly the
/// values the forward transform recorded, rather than recomputing them.
pub struct Equilibration<T = f64> {
    /// Vector of variable scaling terms
    pub d: Vec<T>,
    /// Vector of inverse variable scaling terms
    pub dinv: Vec<T>,
    /// Vector of constraint scaling terms
    pub e: Vec<T>,
    /// Vector of inverse constraint scaling terms
    pub einv: Vec<T>,
    /// overall scaling for objective function
    pub c: T,
    /// inverse of the overall objective scaling
    pub cinv: T,
}

impl<T> Equilibration<T>
where
    T: FloatT,
{
    /// creates a new equilibration object with identity scaling
    pub fn new(n: usize, m: usize) -> Self {
        // Left/Right diagonal scaling for problem data
        let d = vec![T::one(); n];
        let dinv = vec![T::one(); n];
        let e = vec![T::one(); m];
        let einv = vec![T::one(); m];

        let c = T::one();
        let cinv = T::one();

        Self {
            d,
            dinv,
            e,
            einv,
            c,
            cinv,
        }
    }
}
