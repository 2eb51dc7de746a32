#![allow(non_snake_case)]
use crate::algebra::*;
use crate::cones::{CompositeCone, Cone, ConeSpec};
use crate::problem::{ProblemData, ProblemError};
use crate::report;
use crate::settings::Settings;
use crate::variables::Variables;

// ---------------
// Equilibration workspace
// ---------------

/// Owns one problem's data, cone decomposition, variables and settings for
/// the lifetime of a solve.
///
/// The expected call sequence is [`equilibrate`](Workspace::equilibrate)
/// once before the solver iterates on the (now scaled) data, and
/// [`reverse_equilibrate`](Workspace::reverse_equilibrate) once on the
/// terminal iterate after the solver stops.
pub struct Workspace<T = f64>
where
    T: FloatT,
{
    /// problem data, scaled in place by equilibration
    pub data: ProblemData<T>,
    /// cone decomposition of the constraint space
    pub cones: CompositeCone<T>,
    /// warm-start estimate / terminal iterate
    pub variables: Variables<T>,
    /// equilibration settings
    pub settings: Settings<T>,
}

impl<T> Workspace<T>
where
    T: FloatT,
{
    /// Assemble a workspace, checking data dimensions and that the cone
    /// decomposition partitions the constraint space.
    pub fn new(
        P: &CscMatrix<T>,
        q: &[T],
        A: &CscMatrix<T>,
        b: &[T],
        cone_specs: &[ConeSpec],
        settings: Settings<T>,
    ) -> Result<Self, ProblemError> {
        let data = ProblemData::new(P, q, A, b)?;
        let cones = CompositeCone::new(cone_specs);

        if cones.numel() != data.m {
            return Err(ProblemError::ConePartitionMismatch {
                expected: data.m,
                actual: cones.numel(),
            });
        }

        let variables = Variables::new(data.n, data.m);

        Ok(Self {
            data,
            cones,
            variables,
            settings,
        })
    }

    /// Equilibrate the problem data in place, recording the applied
    /// transforms, and move any warm-start estimate into scaled space.
    pub fn equilibrate(&mut self) {
        self.data.equilibrate(&self.cones, &self.settings);

        // per-block hook so that cone-internal parameters track the
        // final constraint scaling
        self.cones.apply_equilibration(&self.data.equilibration.e);

        self.variables.scale(&self.data.equilibration);

        if self.settings.verbose {
            let _ = report::print_summary(&mut std::io::stdout(), &self.data, &self.cones);
        }
    }

    /// Map the terminal iterate back to the caller's original units, and
    /// optionally the problem data with it.
    pub fn reverse_equilibrate(&mut self) {
        self.variables.unscale(&self.data.equilibration);

        if self.settings.restore_data {
            self.data.restore();
        }
    }
}
