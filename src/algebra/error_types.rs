use thiserror::Error;

/// Error type returned by sparse matrix assembly operations.
#[derive(Error, Debug)]
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not sorted by row index within each column
    #[error("Data is not sorted by row index within each column")]
    BadRowOrdering,
    /// Row value exceeds the matrix row dimension
    #[error("Row value exceeds the matrix row dimension")]
    BadRowval,
    /// Matrix column pointer values are defective
    #[error("Bad column pointer values")]
    BadColptr,
    /// Operation on a matrix whose sparsity pattern is not symmetric
    #[error("sparsity pattern mismatch")]
    SparsityMismatch,
}
