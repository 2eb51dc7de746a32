use super::*;
use crate::algebra::*;
use enum_dispatch::*;

/// User-facing description of one block of the cone decomposition.
///
/// The cones are declared in the order in which their blocks partition
/// the constraint vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConeSpec {
    /// The zero cone of the given dimension (equality constraints)
    Zero(usize),
    /// The nonnegative orthant of the given dimension
    Nonnegative(usize),
    /// The second-order cone of the given dimension
    SecondOrder(usize),
    /// The PSD triangle cone of the given matrix side
    PSDTriangle(usize),
    /// The exponential cone (always of dimension 3)
    Exponential,
}

impl ConeSpec {
    /// number of entries the declared cone occupies in the
    /// constraint vector
    pub fn numel(&self) -> usize {
        match self {
            ConeSpec::Zero(dim) => *dim,
            ConeSpec::Nonnegative(dim) => *dim,
            ConeSpec::SecondOrder(dim) => *dim,
            ConeSpec::PSDTriangle(side) => triangular_number(*side),
            ConeSpec::Exponential => 3,
        }
    }
}

/// Internal cone type dispatching the [`Cone`] operations over the
/// closed set of supported kinds.
#[enum_dispatch(Cone<T>)]
pub enum ConeBlock<T>
where
    T: FloatT,
{
    ZeroCone(ZeroCone<T>),
    NonnegativeCone(NonnegativeCone<T>),
    SecondOrderCone(SecondOrderCone<T>),
    PSDTriangleCone(PSDTriangleCone<T>),
    ExponentialCone(ExponentialCone<T>),
}

impl<T> ConeBlock<T>
where
    T: FloatT,
{
    /// short name of the cone kind, for reporting
    pub fn kind(&self) -> &'static str {
        match self {
            ConeBlock::ZeroCone(_) => "zero",
            ConeBlock::NonnegativeCone(_) => "nonnegative",
            ConeBlock::SecondOrderCone(_) => "second order",
            ConeBlock::PSDTriangleCone(_) => "psd triangle",
            ConeBlock::ExponentialCone(_) => "exponential",
        }
    }
}

pub(crate) fn make_cone<T>(spec: ConeSpec) -> ConeBlock<T>
where
    T: FloatT,
{
    match spec {
        ConeSpec::Zero(dim) => ZeroCone::new(dim).into(),
        ConeSpec::Nonnegative(dim) => NonnegativeCone::new(dim).into(),
        ConeSpec::SecondOrder(dim) => SecondOrderCone::new(dim).into(),
        ConeSpec::PSDTriangle(side) => PSDTriangleCone::new(side).into(),
        ConeSpec::Exponential => ExponentialCone::new().into(),
    }
}
