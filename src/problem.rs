#![allow(non_snake_case)]
use crate::algebra::*;
use crate::cones::{CompositeCone, Cone};
use crate::equilibration::Equilibration;
use crate::settings::Settings;
use thiserror::Error;

// ---------------
// Error type for problem assembly
// ---------------

/// Error type returned by problem assembly operations.
#[derive(Error, Debug)]
pub enum ProblemError {
    /// Cost data dimensions are inconsistent
    #[error("cost data incompatible with {expected} variables (P is {rows}x{cols})")]
    BadCostDimensions {
        /// Expected side (number of variables)
        expected: usize,
        /// Actual row count
        rows: usize,
        /// Actual column count
        cols: usize,
    },
    /// Constraint data dimensions are inconsistent
    #[error("constraint vector has length {actual}, expected {expected}")]
    BadConstraintDimensions {
        /// Expected length (rows of A)
        expected: usize,
        /// Actual length
        actual: usize,
    },
    /// Cone partition does not cover the constraint dimension
    #[error("cone partition covers {actual} entries, constraint dimension is {expected}")]
    ConePartitionMismatch {
        /// Constraint dimension
        expected: usize,
        /// Entries covered by the declared cones
        actual: usize,
    },
    /// Sparse matrix data is malformed
    #[error(transparent)]
    SparseFormat(#[from] SparseFormatError),
}

// ---------------
// Data type for problems in standard conic form
// ---------------

/// Problem data in standard conic form, mutated in place by the
/// equilibration procedure.
pub struct ProblemData<T = f64> {
    /// quadratic cost matrix (symmetric)
    pub P: CscMatrix<T>,
    /// linear cost vector
    pub q: Vec<T>,
    /// constraint matrix
    pub A: CscMatrix<T>,
    /// constraint vector
    pub b: Vec<T>,
    /// number of variables
    pub n: usize,
    /// number of constraints
    pub m: usize,
    /// scaling transforms accumulated by equilibration
    pub equilibration: Equilibration<T>,
}

impl<T> ProblemData<T>
where
    T: FloatT,
{
    /// Assemble problem data, checking dimensional compatibility and
    /// sparse formats.   `P` must have a symmetric sparsity pattern and
    /// is symmetrized, so values need only be symmetrizable.
    pub fn new(
        P: &CscMatrix<T>,
        q: &[T],
        A: &CscMatrix<T>,
        b: &[T],
    ) -> Result<Self, ProblemError> {
        let (m, n) = A.size();

        if !P.is_square() || P.ncols() != n || q.len() != n {
            return Err(ProblemError::BadCostDimensions {
                expected: n,
                rows: P.nrows(),
                cols: P.ncols(),
            });
        }
        if b.len() != m {
            return Err(ProblemError::BadConstraintDimensions {
                expected: m,
                actual: b.len(),
            });
        }
        P.check_format()?;
        A.check_format()?;

        let mut P = P.clone();
        P.symmetrize()?;

        let equilibration = Equilibration::<T>::new(n, m);

        Ok(Self {
            P,
            q: q.to_vec(),
            A: A.clone(),
            b: b.to_vec(),
            n,
            m,
            equilibration,
        })
    }

    /// Ruiz equilibration of the problem data.
    ///
    /// Runs a fixed number of scaling passes (no convergence test),
    /// accumulating the applied transforms into
    /// [`equilibration`](ProblemData::equilibration), then rectifies the
    /// constraint scaling on cone blocks that do not admit elementwise
    /// scaling.
    pub fn equilibrate(&mut self, cones: &CompositeCone<T>, settings: &Settings<T>) {
        let data = self;
        let equil = &mut data.equilibration;

        // if equilibration is disabled, just return.  Note that
        // the equilibration structure initializes with identity
        // scaling already.
        if !settings.enable {
            return;
        }

        // references to scaling matrices from workspace
        let (d, e) = (&mut equil.d, &mut equil.e);

        // use the inverse scalings as work vectors
        let dwork = &mut equil.dinv;
        let ework = &mut equil.einv;

        // references to problem data
        let (P, A, q, b) = (&mut data.P, &mut data.A, &mut data.q, &mut data.b);

        let scale_min = settings.min_scaling;
        let scale_max = settings.max_scaling;

        // perform scaling operations for a fixed number of steps
        for _ in 0..settings.max_iter {
            stacked_col_norms(P, A, dwork, ework);

            dwork.scalarop(|x| limit_scaling(x, scale_min, scale_max));
            ework.scalarop(|x| limit_scaling(x, scale_min, scale_max));

            dwork.rsqrt();
            ework.rsqrt();

            // Scale the problem data and update the
            // equilibration matrices
            scale_data(P, A, q, b, Some(dwork), Some(ework), T::one());
            d.hadamard(dwork);
            e.hadamard(ework);

            // now use the dwork array to hold the
            // column norms of the newly scaled P
            // so that we can compute the mean
            P.col_norms(dwork);
            let mean_col_norm_P = dwork.mean();
            let inf_norm_q = q.norm_inf();

            // either norm vanishing would produce a divide by zero or
            // rescale an all-zero objective, so the objective scaling
            // is left unchanged for this pass
            if mean_col_norm_P != T::zero() && inf_norm_q != T::zero() {
                let mean_col_norm_P = limit_scaling(mean_col_norm_P, scale_min, scale_max);
                let inf_norm_q = limit_scaling(inf_norm_q, scale_min, scale_max);

                let scale_cost = T::max(inf_norm_q, mean_col_norm_P);
                let scale_cost = limit_scaling(scale_cost, scale_min, scale_max);
                let ctmp = T::recip(scale_cost);

                // scale the penalty terms and overall scaling
                scale_data(P, A, q, b, None, None, ctmp);
                equil.c *= ctmp;
            }
        } //end Ruiz scaling loop

        // fix scalings in cones for which elementwise
        // scaling can't be applied
        if cones.rectify_equilibration(ework, e) {
            // only rescale again if some cones were rectified
            scale_data(P, A, q, b, None, Some(ework), T::one());
            e.hadamard(ework);
        }

        // diagonal scaling preserves the symmetry of P up to floating
        // point roundoff; restore it exactly
        P.symmetrize().expect("P pattern is symmetric");

        // update the inverse scaling data
        equil.dinv.scalarop_from(T::recip, d);
        equil.einv.scalarop_from(T::recip, e);
        equil.cinv = T::recip(equil.c);
    }

    // Map the stored problem data back to the caller's original units
    // using the recorded inverse transforms.
    pub(crate) fn restore(&mut self) {
        let equil = &self.equilibration;
        scale_data(
            &mut self.P,
            &mut self.A,
            &mut self.q,
            &mut self.b,
            Some(&equil.dinv),
            Some(&equil.einv),
            equil.cinv,
        );
    }
}

// ---------------
// utilities
// ---------------

fn stacked_col_norms<T: FloatT>(
    P: &CscMatrix<T>,
    A: &CscMatrix<T>,
    norm_LHS: &mut [T],
    norm_RHS: &mut [T],
) {
    P.col_norms(norm_LHS);
    A.col_norms_no_reset(norm_LHS); // norms of the columns of [P; A]
    A.row_norms(norm_RHS); // same as column norms of A'
}

fn limit_scaling<T: FloatT>(s: T, minval: T, maxval: T) -> T {
    // a zero norm carries no scaling information and maps to the
    // identity factor rather than to the range boundary
    if s == T::zero() {
        T::one()
    } else {
        s.clip(minval, maxval)
    }
}

fn scale_data<T: FloatT>(
    P: &mut CscMatrix<T>,
    A: &mut CscMatrix<T>,
    q: &mut [T],
    b: &mut [T],
    d: Option<&[T]>,
    e: Option<&[T]>,
    c: T,
) {
    // `None` on either side stands for the identity diagonal and skips
    // that side's multiplications outright
    match (d, e) {
        (Some(d), Some(e)) => {
            P.lrscale(d, d); // P[:,:] = Ds*P*Ds
            A.lrscale(e, d); // A[:,:] = Es*A*Ds
            q.hadamard(d);
            b.hadamard(e);
        }
        (Some(d), None) => {
            P.lrscale(d, d); // P[:,:] = Ds*P*Ds
            A.rscale(d); // A[:,:] = A*Ds
            q.hadamard(d);
        }
        (None, Some(e)) => {
            A.lscale(e); // A[:,:] = Es*A
            b.hadamard(e);
        }
        (None, None) => {}
    }

    // the objective scalar applies to the cost terms only
    if c != T::one() {
        P.scale(c);
        q.scale(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_scaling() {
        assert_eq!(limit_scaling(0.0, 1e-4, 1e4), 1.0);
        assert_eq!(limit_scaling(1e-8, 1e-4, 1e4), 1e-4);
        assert_eq!(limit_scaling(2.0, 1e-4, 1e4), 2.0);
        assert_eq!(limit_scaling(1e8, 1e-4, 1e4), 1e4);
    }

    fn test_data() -> (CscMatrix<f64>, CscMatrix<f64>, Vec<f64>, Vec<f64>) {
        // P = [4. 1; 1 2]
        let P = CscMatrix::new(
            2,
            2,
            vec![0, 2, 4],
            vec![0, 1, 0, 1],
            vec![4., 1., 1., 2.], //
        );
        // A = [1. 2; 0 -1; 3 0]
        let A = CscMatrix::new(
            3,
            2,
            vec![0, 2, 4],
            vec![0, 2, 0, 1],
            vec![1., 3., 2., -1.], //
        );
        let q = vec![1., -1.];
        let b = vec![1., 2., 3.];
        (P, A, q, b)
    }

    #[test]
    fn test_stacked_col_norms() {
        let (P, A, q, b) = test_data();
        let mut norm_lhs = vec![0.0; q.len()];
        let mut norm_rhs = vec![0.0; b.len()];

        stacked_col_norms(&P, &A, &mut norm_lhs, &mut norm_rhs);

        //infinity norms of the columns of [P; A] and the rows of A
        assert_eq!(norm_lhs, vec![4., 2.]);
        assert_eq!(norm_rhs, vec![2., 1., 3.]);
    }

    #[test]
    fn test_scale_data() {
        let (mut P, mut A, mut q, mut b) = test_data();
        let d = vec![2., 1.];
        let e = vec![1., 2., 0.5];

        scale_data(&mut P, &mut A, &mut q, &mut b, Some(&d), Some(&e), 1.0);
        assert_eq!(P.nzval, vec![16., 2., 2., 2.]);
        assert_eq!(A.nzval, vec![2., 3., 2., -2.]);
        assert_eq!(q, vec![2., -1.]);
        assert_eq!(b, vec![1., 4., 1.5]);

        //scalar-only rescaling touches the cost terms alone
        let (mut P, mut A, mut q, mut b) = test_data();
        scale_data(&mut P, &mut A, &mut q, &mut b, None, None, 0.5);
        assert_eq!(P.nzval, vec![2., 0.5, 0.5, 1.]);
        assert_eq!(q, vec![0.5, -0.5]);
        assert_eq!(A.nzval, vec![1., 3., 2., -1.]);
        assert_eq!(b, vec![1., 2., 3.]);

        //one-sided scalings
        let (mut P, mut A, mut q, mut b) = test_data();
        scale_data(&mut P, &mut A, &mut q, &mut b, None, Some(&e), 1.0);
        assert_eq!(A.nzval, vec![1., 1.5, 2., -2.]);
        assert_eq!(b, vec![1., 4., 1.5]);
        assert_eq!(P.nzval, vec![4., 1., 1., 2.]);
        assert_eq!(q, vec![1., -1.]);

        let (mut P, mut A, mut q, mut b) = test_data();
        scale_data(&mut P, &mut A, &mut q, &mut b, Some(&d), None, 1.0);
        assert_eq!(P.nzval, vec![16., 2., 2., 2.]);
        assert_eq!(A.nzval, vec![2., 6., 2., -1.]);
        assert_eq!(q, vec![2., -1.]);
        assert_eq!(b, vec![1., 2., 3.]);
    }

    #[test]
    fn test_problem_dimension_checks() {
        let (P, A, q, b) = test_data();

        assert!(ProblemData::new(&P, &q, &A, &b).is_ok());

        let bad_q = vec![1.; 3];
        assert!(matches!(
            ProblemData::new(&P, &bad_q, &A, &b),
            Err(ProblemError::BadCostDimensions { .. })
        ));

        let bad_b = vec![1.; 4];
        assert!(matches!(
            ProblemData::new(&P, &q, &A, &bad_b),
            Err(ProblemError::BadConstraintDimensions { .. })
        ));

        //P with an asymmetric sparsity pattern is rejected
        let bad_P = CscMatrix::new(2, 2, vec![0, 1, 2], vec![0, 0], vec![4., 1.]);
        assert!(matches!(
            ProblemData::new(&bad_P, &q, &A, &b),
            Err(ProblemError::SparseFormat(
                SparseFormatError::SparsityMismatch
            ))
        ));
    }
}
