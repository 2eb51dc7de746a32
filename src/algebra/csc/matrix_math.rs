use crate::algebra::*;
use std::iter::zip;

impl<T: FloatT> MatrixMath for CscMatrix<T> {
    type T = T;

    fn scale(&mut self, c: T) {
        self.nzval.scale(c);
    }

    fn col_norms(&self, norms: &mut [T]) {
        norms.fill(T::zero());
        self.col_norms_no_reset(norms);
    }

    fn col_norms_no_reset(&self, norms: &mut [T]) {
        assert_eq!(norms.len(), self.colptr.len() - 1);

        for (i, v) in norms.iter_mut().enumerate() {
            *v = self
                .nzval
                .iter()
                .take(self.colptr[i + 1])
                .skip(self.colptr[i])
                .fold(*v, |m, &nzval| T::max(m, T::abs(nzval)));
        }
    }

    fn row_norms(&self, norms: &mut [T]) {
        norms.fill(T::zero());
        self.row_norms_no_reset(norms);
    }

    fn row_norms_no_reset(&self, norms: &mut [T]) {
        assert_eq!(self.rowval.len(), *self.colptr.last().unwrap());

        for (row, val) in zip(&self.rowval, &self.nzval) {
            norms[*row] = T::max(norms[*row], T::abs(*val));
        }
    }

    fn lscale(&mut self, l: &[T]) {
        for (val, row) in zip(&mut self.nzval, &self.rowval) {
            *val *= l[*row];
        }
    }

    fn rscale(&mut self, r: &[T]) {
        let colptr = &self.colptr;
        let vals = &mut self.nzval;

        assert_eq!(vals.len(), *colptr.last().unwrap());
        for i in 0..self.n {
            vals[colptr[i]..colptr[i + 1]].scale(r[i]);
        }
    }

    fn lrscale(&mut self, l: &[T], r: &[T]) {
        assert_eq!(self.nzval.len(), *self.colptr.last().unwrap());

        for (col, &ri) in r.iter().enumerate() {
            let (first, last) = (self.colptr[col], self.colptr[col + 1]);
            let vals = &mut self.nzval[first..last];
            let rows = &self.rowval[first..last];

            for (val, row) in zip(vals, rows) {
                *val *= l[*row] * ri;
            }
        }
    }
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Force exact symmetry on a square matrix by averaging each entry
    /// with its mirror image.   The sparsity pattern must itself be
    /// symmetric, otherwise `SparseFormatError::SparsityMismatch` is
    /// returned and the matrix is unmodified.
    pub fn symmetrize(&mut self) -> Result<&mut Self, SparseFormatError> {
        let map = self.transpose_positions()?;
        let half = (0.5).as_T();

        for (k, &tk) in map.iter().enumerate() {
            // visit each mirrored pair once; diagonal entries map to themselves
            if k < tk {
                let v = (self.nzval[k] + self.nzval[tk]) * half;
                self.nzval[k] = v;
                self.nzval[tk] = v;
            }
        }
        Ok(self)
    }

    // For each nonzero position k holding entry (i,j), find the position of
    // the mirrored entry (j,i).   Entries within each column are assumed
    // sorted by row index, so a single cursor per column suffices.
    fn transpose_positions(&self) -> Result<Vec<usize>, SparseFormatError> {
        if !self.is_square() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        let mut next = self.colptr[..self.n].to_vec();
        let mut map = vec![0usize; self.nnz()];

        for col in 0..self.n {
            for k in self.colptr[col]..self.colptr[col + 1] {
                let row = self.rowval[k];
                let p = next[row];
                if p >= self.colptr[row + 1] || self.rowval[p] != col {
                    return Err(SparseFormatError::SparsityMismatch);
                }
                next[row] += 1;
                map[k] = p;
            }
        }
        Ok(map)
    }
}
