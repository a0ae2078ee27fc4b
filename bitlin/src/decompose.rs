//! Reduction of a column-major matrix to a row-permuted lower-triangular
//! form.
//!
//! The algorithm is Gaussian elimination by column operations; since the only
//! nonzero scalar is 1 there is no row scaling, and every elementary step is
//! its own inverse. The decomposition returns the accumulated transformation
//! matrix together with its inverse, and leaves the input mutated so that
//! `mutated * transform == original`.

use crate::bitarr::BitArr;
use crate::chunk::Chunk;
use crate::matrix::ColMatrix;
use crate::vector::Gf2Vector;

/// Triangularizes `mat` in place, choosing pivots with `pivot`.
///
/// `pivot` receives each column in its current (partially reduced) state and
/// must return the index of a nonzero row, or the column length as a "zero
/// column" sentinel; such columns contribute no elimination step and are
/// skipped, so rank-deficient inputs are handled like any other.
///
/// Returns the pair `(transform, inverse)`, mutually inverse matrices with
/// `mutated * transform == original`. The transform vector type `VT` must
/// have length `N`.
pub fn plu_with<VI, VT, const N: usize, F>(
    mat: &mut ColMatrix<VI, N>,
    mut pivot: F,
) -> (ColMatrix<VT, N>, ColMatrix<VT, N>)
where
    VI: Gf2Vector,
    VT: Gf2Vector,
    F: FnMut(&VI) -> usize,
{
    let m = mat.veclength();
    let ident = ColMatrix::<VT, N>::identity();
    assert_eq!(
        ident.veclength(),
        N,
        "transform vector length {} does not match the column count {}",
        ident.veclength(),
        N
    );

    let mut transform = ident.clone();
    let mut inverse = ident.clone();

    for i in 0..N.saturating_sub(1) {
        let piv = pivot(mat.vec(i));

        // Zero column: nothing to eliminate with.
        if piv == m {
            continue;
        }

        let mut step = ident.clone();
        let col_i = mat.vec(i).clone();
        for j in (i + 1)..N {
            if mat.vec(j).test(piv) {
                mat.vec_mut(j).xor_in(&col_i);
                step.vec_mut(j).set(i);
            }
        }

        // step * step == identity, so accumulating it on both sides keeps
        // the pair mutually inverse.
        transform = &step * &transform;
        inverse = &inverse * &step;
    }

    (transform, inverse)
}

/// [`plu_with`] using the lowest-index nonzero row of each column as the
/// pivot.
pub fn plu<const M: usize, C, const ML: usize, VT, const N: usize>(
    mat: &mut ColMatrix<BitArr<M, C, ML>, N>,
) -> (ColMatrix<VT, N>, ColMatrix<VT, N>)
where
    C: Chunk,
    VT: Gf2Vector,
{
    plu_with(mat, |v| v.count_trail0())
}

/// [`plu_with`] using the highest-index nonzero row of each column as the
/// pivot (the "last nonzero row" variant).
pub fn plu_lnr<const M: usize, C, const ML: usize, VT, const N: usize>(
    mat: &mut ColMatrix<BitArr<M, C, ML>, N>,
) -> (ColMatrix<VT, N>, ColMatrix<VT, N>)
where
    C: Chunk,
    VT: Gf2Vector,
{
    plu_with(mat, |v| v.msb())
}
