//! Iteration over the bit permutations of a fixed popcount.
//!
//! `next_permutation` steps a vector to the lexicographically next value with
//! the same number of set bits, so starting from the low `k` bits and
//! stepping `C(N, k) - 1` times enumerates every `N`-bit value of popcount
//! `k` in increasing order. The step is the classic trailing-run
//! rearrangement, built from the vector's own trailing-zero count, increment,
//! decrement and shifts.

use crate::bitarr::BitArr;
use crate::chunk::{binom, Chunk};

/// Advances `bits` to the lexicographically next permutation of its set
/// bits.
///
/// Returns `true` when the input was the maximal pattern (all set bits packed
/// at the top), i.e. the enumeration has wrapped.
pub fn next_permutation<const N: usize, C: Chunk, const L: usize>(
    bits: &mut BitArr<N, C, L>,
) -> bool {
    let i = bits.count_trail0();

    // Fill the low run of zeros below the lowest set bit.
    let mut filled = *bits;
    filled.decrement();
    filled |= *bits;

    let wrapped = filled.all();

    // The carry ripples into the bit above the trailing block of ones; the
    // remaining ones restart from the bottom.
    let mut carried = filled;
    carried.increment();
    let mut rest = !filled & carried;
    rest.decrement();

    *bits = carried | (rest >> (i + 1));
    wrapped
}

/// The 0-based rank of `bits` in the lexicographic enumeration of all values
/// with the same popcount.
pub fn perm_index<const N: usize, C: Chunk, const L: usize>(bits: &BitArr<N, C, L>) -> usize {
    let mut rank = 0u64;
    let mut cnt = 0u64;
    for i in bits.iter_ones() {
        cnt += 1;
        rank += binom(i as u64, cnt);
    }
    rank as usize
}
