//! Matrices over the two-element field.
//!
//! A [`Matrix`] is a fixed-size array of [`Gf2Vector`]s plus an orientation
//! tag deciding whether the stored vectors are rows ([`RowMajor`]) or columns
//! ([`ColMajor`]). One shared core implements everything in terms of "the
//! stored vectors" and "the cross direction"; the tag is consulted only where
//! the two interpretations actually differ (`coeff`, the dimensions, and the
//! row/column-named dispatchers).

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::bitarr::BitArr;
use crate::chunk::Chunk;
use crate::vector::Gf2Vector;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::RowMajor {}
    impl Sealed for super::ColMajor {}
}

/// Storage orientation of a [`Matrix`]; implemented by [`RowMajor`] and
/// [`ColMajor`] only.
pub trait Orientation: sealed::Sealed {
    const ROW_MAJOR: bool;
}

/// Marker: stored vector `i` is row `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowMajor;

/// Marker: stored vector `i` is column `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColMajor;

impl Orientation for RowMajor {
    const ROW_MAJOR: bool = true;
}

impl Orientation for ColMajor {
    const ROW_MAJOR: bool = false;
}

/// Error returned by the checked vector accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// The offending index.
    pub index: usize,
    /// Number of stored vectors; valid indices are `0..nvecs`.
    pub nvecs: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vector index {} out of range for a matrix storing {} vectors",
            self.index, self.nvecs
        )
    }
}

impl std::error::Error for IndexError {}

/// A matrix over the two-element field, stored as `NV` vectors of type `V`.
///
/// All stored vectors share the same logical length (a property of `V`), so
/// a row-major matrix is `NV x veclength` and a column-major matrix is
/// `veclength x NV`. Addition is XOR of the stored vectors; multiplication
/// XOR-accumulates the vectors selected by the set bits of the other operand,
/// making its cost proportional to popcounts rather than full lengths.
pub struct Matrix<V, const NV: usize, O = RowMajor> {
    vecs: [V; NV],
    orient: PhantomData<O>,
}

/// A matrix whose stored vectors are its rows.
pub type RowMatrix<V, const NV: usize> = Matrix<V, NV, RowMajor>;

/// A matrix whose stored vectors are its columns.
pub type ColMatrix<V, const NV: usize> = Matrix<V, NV, ColMajor>;

impl<V: Clone, const NV: usize, O> Clone for Matrix<V, NV, O> {
    fn clone(&self) -> Self {
        Matrix {
            vecs: self.vecs.clone(),
            orient: PhantomData,
        }
    }
}

impl<V: Copy, const NV: usize, O> Copy for Matrix<V, NV, O> {}

impl<V: PartialEq, const NV: usize, O> PartialEq for Matrix<V, NV, O> {
    fn eq(&self, other: &Self) -> bool {
        self.vecs == other.vecs
    }
}

impl<V: Eq, const NV: usize, O> Eq for Matrix<V, NV, O> {}

impl<V: fmt::Debug, const NV: usize, O> fmt::Debug for Matrix<V, NV, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix").field("vecs", &self.vecs).finish()
    }
}

impl<V: Gf2Vector, const NV: usize, O: Orientation> Matrix<V, NV, O> {
    /// Builds a matrix from a function producing stored vector `i`.
    pub fn build(f: impl FnMut(usize) -> V) -> Self {
        const {
            assert!(NV > 0, "a matrix must store at least one vector");
        }
        Matrix {
            vecs: std::array::from_fn(f),
            orient: PhantomData,
        }
    }

    /// The zero matrix (every stored vector default-constructed).
    pub fn zero() -> Self {
        Self::build(|_| V::default())
    }

    /// The matrix whose `(i, i)` entry is bit `i` of `diag`, every other
    /// entry zero.
    pub fn diagonal(diag: &V) -> Self {
        Self::build(|i| {
            let mut v = V::default();
            if i < v.size() && diag.test(i) {
                v.set(i);
            }
            v
        })
    }

    /// The identity matrix: ones on the diagonal as far as it reaches.
    pub fn identity() -> Self {
        Self::build(|i| {
            let mut v = V::default();
            v.set(i);
            v
        })
    }

    /// Number of stored vectors.
    pub fn nvecs(&self) -> usize {
        NV
    }

    /// Logical length shared by the stored vectors.
    pub fn veclength(&self) -> usize {
        self.vecs[0].size()
    }

    pub fn rows(&self) -> usize {
        if O::ROW_MAJOR {
            NV
        } else {
            self.veclength()
        }
    }

    pub fn cols(&self) -> usize {
        if O::ROW_MAJOR {
            self.veclength()
        } else {
            NV
        }
    }

    /// The coefficient at row `r`, column `c`. This is the single place where
    /// the orientation decides how an index pair maps onto the stored vectors.
    pub fn coeff(&self, r: usize, c: usize) -> bool {
        if O::ROW_MAJOR {
            self.vecs[r].test(c)
        } else {
            self.vecs[c].test(r)
        }
    }

    /// The `i`-th stored vector.
    ///
    /// # Errors
    ///
    /// Fails with [`IndexError`] when `i >= NV`.
    pub fn try_vec(&self, i: usize) -> Result<&V, IndexError> {
        self.vecs.get(i).ok_or(IndexError { index: i, nvecs: NV })
    }

    /// Mutable access to the `i`-th stored vector.
    ///
    /// # Errors
    ///
    /// Fails with [`IndexError`] when `i >= NV`.
    pub fn try_vec_mut(&mut self, i: usize) -> Result<&mut V, IndexError> {
        self.vecs
            .get_mut(i)
            .ok_or(IndexError { index: i, nvecs: NV })
    }

    /// The `i`-th stored vector.
    ///
    /// # Panics
    ///
    /// Panics when `i >= NV`; use [`try_vec`](Self::try_vec) to recover
    /// instead.
    pub fn vec(&self, i: usize) -> &V {
        match self.try_vec(i) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Mutable access to the `i`-th stored vector.
    ///
    /// # Panics
    ///
    /// Panics when `i >= NV`.
    pub fn vec_mut(&mut self, i: usize) -> &mut V {
        match self.try_vec_mut(i) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// The `i`-th stored vector without a range check.
    ///
    /// # Safety
    ///
    /// `i` must be less than `NV`.
    pub unsafe fn vec_unchecked(&self, i: usize) -> &V {
        unsafe { self.vecs.get_unchecked(i) }
    }

    /// Mutable access to the `i`-th stored vector without a range check.
    ///
    /// # Safety
    ///
    /// `i` must be less than `NV`.
    pub unsafe fn vec_unchecked_mut(&mut self, i: usize) -> &mut V {
        unsafe { self.vecs.get_unchecked_mut(i) }
    }

    // Elementary operations in the stored direction.

    fn scalar_vec(&mut self, c: bool, i: usize) {
        if !c {
            self.vecs[i] = V::default();
        }
    }

    fn swap_vecs(&mut self, i: usize, j: usize) {
        if i != j {
            self.vecs.swap(i, j);
        }
    }

    fn axpy_vecs(&mut self, c: bool, src: usize, tgt: usize) {
        if c {
            let s = self.vecs[src].clone();
            self.vecs[tgt].xor_in(&s);
        }
    }

    // Elementary operations in the cross direction: one bit position across
    // every stored vector.

    fn scalar_cross(&mut self, c: bool, i: usize) {
        if !c {
            for v in &mut self.vecs {
                v.reset(i);
            }
        }
    }

    fn swap_cross(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for v in &mut self.vecs {
            let (bi, bj) = (v.test(i), v.test(j));
            if bi != bj {
                if bi {
                    v.reset(i);
                    v.set(j);
                } else {
                    v.set(i);
                    v.reset(j);
                }
            }
        }
    }

    fn axpy_cross(&mut self, c: bool, isrc: usize, itgt: usize) {
        if !c {
            return;
        }
        for v in &mut self.vecs {
            if v.test(isrc) {
                if v.test(itgt) {
                    v.reset(itgt);
                } else {
                    v.set(itgt);
                }
            }
        }
    }

    /// Multiplies row `i` by the scalar `c`: zeroes the row for `false`, a
    /// no-op for `true`.
    pub fn scalar_row(&mut self, c: bool, i: usize) -> &mut Self {
        if O::ROW_MAJOR {
            self.scalar_vec(c, i);
        } else {
            self.scalar_cross(c, i);
        }
        self
    }

    /// Multiplies column `i` by the scalar `c`.
    pub fn scalar_col(&mut self, c: bool, i: usize) -> &mut Self {
        if O::ROW_MAJOR {
            self.scalar_cross(c, i);
        } else {
            self.scalar_vec(c, i);
        }
        self
    }

    /// Exchanges rows `i` and `j`; a no-op when `i == j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> &mut Self {
        if O::ROW_MAJOR {
            self.swap_vecs(i, j);
        } else {
            self.swap_cross(i, j);
        }
        self
    }

    /// Exchanges columns `i` and `j`; a no-op when `i == j`.
    pub fn swap_cols(&mut self, i: usize, j: usize) -> &mut Self {
        if O::ROW_MAJOR {
            self.swap_cross(i, j);
        } else {
            self.swap_vecs(i, j);
        }
        self
    }

    /// XORs row `isrc` into row `itgt` when `c` is set. With `isrc == itgt`
    /// this zeroes the row, since x + x = 0.
    pub fn axpy_rows(&mut self, c: bool, isrc: usize, itgt: usize) -> &mut Self {
        if O::ROW_MAJOR {
            self.axpy_vecs(c, isrc, itgt);
        } else {
            self.axpy_cross(c, isrc, itgt);
        }
        self
    }

    /// XORs column `isrc` into column `itgt` when `c` is set.
    pub fn axpy_cols(&mut self, c: bool, isrc: usize, itgt: usize) -> &mut Self {
        if O::ROW_MAJOR {
            self.axpy_cross(c, isrc, itgt);
        } else {
            self.axpy_vecs(c, isrc, itgt);
        }
        self
    }
}

impl<V: Gf2Vector, const NV: usize> Matrix<V, NV, RowMajor> {
    /// Computes `w * self` for a row vector `w`: the XOR of the rows selected
    /// by the set bits of `w`.
    pub fn vec_mul<W: Gf2Vector>(&self, w: &W) -> V {
        assert_eq!(
            w.size(),
            NV,
            "dimension mismatch: vector of length {} times a matrix with {} rows",
            w.size(),
            NV
        );
        let mut acc = V::default();
        w.for_each_set_bit(|i| acc.xor_in(&self.vecs[i]));
        acc
    }
}

impl<V: Gf2Vector, const NV: usize> Matrix<V, NV, ColMajor> {
    /// Computes `self * w` for a column vector `w`: the XOR of the columns
    /// selected by the set bits of `w`.
    pub fn mul_vec<W: Gf2Vector>(&self, w: &W) -> V {
        assert_eq!(
            w.size(),
            NV,
            "dimension mismatch: matrix with {} columns times a vector of length {}",
            NV,
            w.size()
        );
        let mut acc = V::default();
        w.for_each_set_bit(|i| acc.xor_in(&self.vecs[i]));
        acc
    }
}

impl<V: Gf2Vector, const NV: usize, O: Orientation> Default for Matrix<V, NV, O> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<V: Gf2Vector, const NV: usize, O: Orientation> AddAssign<&Self> for Matrix<V, NV, O> {
    fn add_assign(&mut self, rhs: &Self) {
        for (a, b) in self.vecs.iter_mut().zip(rhs.vecs.iter()) {
            a.xor_in(b);
        }
    }
}

impl<V: Gf2Vector, const NV: usize, O: Orientation> Add<&Self> for Matrix<V, NV, O> {
    type Output = Self;

    fn add(mut self, rhs: &Self) -> Self {
        self += rhs;
        self
    }
}

/// Subtraction coincides with addition over the two-element field.
impl<V: Gf2Vector, const NV: usize, O: Orientation> SubAssign<&Self> for Matrix<V, NV, O> {
    fn sub_assign(&mut self, rhs: &Self) {
        *self += rhs;
    }
}

impl<V: Gf2Vector, const NV: usize, O: Orientation> Sub<&Self> for Matrix<V, NV, O> {
    type Output = Self;

    fn sub(mut self, rhs: &Self) -> Self {
        self -= rhs;
        self
    }
}

/// (Row vector) * (row-major matrix).
impl<V, const NV: usize, const M: usize, C, const L: usize> Mul<&Matrix<V, NV, RowMajor>>
    for &BitArr<M, C, L>
where
    V: Gf2Vector,
    C: Chunk,
{
    type Output = V;

    fn mul(self, rhs: &Matrix<V, NV, RowMajor>) -> V {
        rhs.vec_mul(self)
    }
}

/// (Column-major matrix) * (column vector).
impl<V, const NV: usize, const M: usize, C, const L: usize> Mul<&BitArr<M, C, L>>
    for &Matrix<V, NV, ColMajor>
where
    V: Gf2Vector,
    C: Chunk,
{
    type Output = V;

    fn mul(self, rhs: &BitArr<M, C, L>) -> V {
        self.mul_vec(rhs)
    }
}

/// Row-major product: output row `i` is `lhs.row(i) * rhs`.
impl<VL, VR, const NL: usize, const NR: usize> Mul<&Matrix<VR, NR, RowMajor>>
    for &Matrix<VL, NL, RowMajor>
where
    VL: Gf2Vector,
    VR: Gf2Vector,
{
    type Output = Matrix<VR, NL, RowMajor>;

    fn mul(self, rhs: &Matrix<VR, NR, RowMajor>) -> Self::Output {
        assert_eq!(
            self.veclength(),
            NR,
            "attempting to multiply matrices of incompatible dimensions: {} != {}",
            self.veclength(),
            NR
        );
        Matrix::build(|i| rhs.vec_mul(self.vec(i)))
    }
}

/// Column-major product: output column `j` is `lhs * rhs.col(j)`.
impl<VL, VR, const NL: usize, const NR: usize> Mul<&Matrix<VR, NR, ColMajor>>
    for &Matrix<VL, NL, ColMajor>
where
    VL: Gf2Vector,
    VR: Gf2Vector,
{
    type Output = Matrix<VL, NR, ColMajor>;

    fn mul(self, rhs: &Matrix<VR, NR, ColMajor>) -> Self::Output {
        assert_eq!(
            rhs.veclength(),
            NL,
            "attempting to multiply matrices of incompatible dimensions: {} != {}",
            NL,
            rhs.veclength()
        );
        Matrix::build(|j| self.mul_vec(rhs.vec(j)))
    }
}

impl<V: Gf2Vector, const NV: usize, O: Orientation> fmt::Display for Matrix<V, NV, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                write!(f, " {} ", if self.coeff(r, c) { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
