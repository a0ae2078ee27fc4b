//! `bitlin` is a Rust library for fixed-width bit vectors and linear algebra
//! over the 2-element finite field. Some features include:
//! - bit vectors with compile-time bit count and configurable chunk width,
//!   packed with a guaranteed-zero tail beyond the logical length
//! - the full complement of bitwise operators, shifts with cross-chunk
//!   carries, slicing and in-place replacement, and ripple-carry increment
//! - branch-light word primitives (SWAR popcount, trailing-run counts,
//!   highest-set-bit search) and an O(popcount) set-bit iterator
//! - row-major and column-major matrices over any conforming vector type,
//!   with elementary row/column operations and popcount-proportional products
//! - triangularization of column-major matrices returning a transform
//!   together with its inverse
//!
//! The two main data structures provided by this crate are:
//! - [`BitArr`]: a fixed-width vector of bits, usually named through the
//!   [`bit_arr!`] macro which computes the chunk count
//! - [`Matrix`]: a fixed-size matrix of [`Gf2Vector`]s, viewable as row-major
//!   or column-major

#![allow(
    clippy::needless_range_loop,
    clippy::uninlined_format_args,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod bitarr;
pub mod chunk;
pub mod decompose;
pub mod matrix;
pub mod perm;
pub mod vector;

pub use bitarr::{BitArr, PopIter};
pub use chunk::{binom, bitwave, count_trail0, count_trail1, low_mask, msb, nchunks, popcount, Chunk};
pub use decompose::{plu, plu_lnr, plu_with};
pub use matrix::{ColMajor, ColMatrix, IndexError, Matrix, Orientation, RowMajor, RowMatrix};
pub use perm::{next_permutation, perm_index};
pub use vector::{dot, parity, Gf2Vector, ParityStrategy, VectorCaps};
