use crate::algebra::*;
use crate::cones::{CompositeCone, Cone};
use crate::problem::ProblemData;
use std::io::Write;

const CONE_KINDS: [&str; 5] = [
    "zero",
    "nonnegative",
    "second order",
    "psd triangle",
    "exponential",
];

// Plain-text summary of the equilibration outcome, written to the
// given stream when verbose printing is enabled.
pub(crate) fn print_summary<T, W>(
    out: &mut W,
    data: &ProblemData<T>,
    cones: &CompositeCone<T>,
) -> std::io::Result<()>
where
    T: FloatT,
    W: Write,
{
    writeln!(out, "\nequilibration:")?;
    writeln!(out, "  variables     = {}", data.n)?;
    writeln!(out, "  constraints   = {}", data.m)?;
    writeln!(out, "  nnz(P)        = {}", data.P.nnz())?;
    writeln!(out, "  nnz(A)        = {}", data.A.nnz())?;
    writeln!(out, "  cones (total) = {}", cones.len())?;

    for kind in CONE_KINDS {
        _print_conedims_by_kind(out, cones, kind)?;
    }

    let equil = &data.equilibration;
    writeln!(
        out,
        "  primal scaling in [{:.3e}, {:.3e}]",
        equil.d.minimum(),
        equil.d.maximum()
    )?;
    writeln!(
        out,
        "  dual scaling   in [{:.3e}, {:.3e}]",
        equil.e.minimum(),
        equil.e.maximum()
    )?;
    writeln!(out, "  cost scaling   = {:.3e}", equil.c)?;

    Ok(())
}

fn _print_conedims_by_kind<T, W>(
    out: &mut W,
    cones: &CompositeCone<T>,
    kind: &str,
) -> std::io::Result<()>
where
    T: FloatT,
    W: Write,
{
    let count = cones.iter().filter(|c| c.kind() == kind).count();

    if count == 0 {
        return Ok(());
    }

    let dims: Vec<usize> = cones
        .iter()
        .filter(|c| c.kind() == kind)
        .map(|c| c.numel())
        .collect();

    write!(out, "    : {} = {}, ", kind, count)?;
    writeln!(out, "numel = {:?}", dims)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cones::ConeSpec;

    #[test]
    fn test_print_summary() {
        let P = CscMatrix::<f64>::identity(2);
        let A = CscMatrix::<f64>::identity(2);
        let data = ProblemData::new(&P, &[1., 1.], &A, &[1., 1.]).unwrap();
        let cones = CompositeCone::new(&[ConeSpec::SecondOrder(2)]);

        let mut buf = Vec::new();
        print_summary(&mut buf, &data, &cones).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("variables     = 2"));
        assert!(text.contains("second order = 1"));
        assert!(text.contains("cost scaling"));
    }
}
