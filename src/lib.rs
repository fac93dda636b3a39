//! # Rank/Select Bits
//!
//! *Constant-time bit counting with sub-linear extra space.*
//!
//! ## Intuition First
//!
//! Picture a very long shelf of books where some spines are marked with
//! a red dot. Two questions come up constantly: "how many marked books
//! are there before position p?" (rank) and "where is the k-th marked
//! book?" (select). Walking the shelf works, but it costs a full scan
//! every time. Instead, tape a small running tally to every 64th book
//! and a coarser tally to every 1024th: now any rank question is one
//! tally plus a glance at a single book, and any select question is a
//! short binary search over tallies.
//!
//! ## The Problem
//!
//! Answering rank/select on a raw bitvector costs $O(n)$ per query.
//! Storing every prefix count costs $O(n \log n)$ bits. The two-level
//! directory sits in between: $O(1)$ rank, $O(\log n)$ select, with
//! directory overhead that vanishes relative to the data.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Jacobson    Defined the succinct paradigm in his PhD thesis (rank/select)
//! 1996  Munro-Raman Constant-time rank and select in o(n) extra space
//! 2002  Raman et al RRR: entropy-compressed blocks via (class, offset) codes
//! 2007  Vigna       rank9/select9: engineering rank directories for real CPUs
//! ```
//!
//! ## Mathematical Formulation
//!
//! For a bitvector $B$ of length $n$:
//! - `rank1(p)` $= |\{ i < p : B[i] = 1 \}|$.
//! - `select1(k)` $=$ the position of the $k$-th set bit ($k \geq 1$).
//!
//! The combinatorial codec maps a 15-bit block of popcount $c$ to its
//! lexicographic rank among all $\binom{15}{c}$ such blocks, a bijection
//! that underlies the RRR compressed representation.
//!
//! ## Complexity Analysis
//!
//! - **Rank**: $O(1)$ — one directory load, one masked popcount.
//! - **Select**: $O(\log n)$ — two strict-< binary searches plus one
//!   in-word select.
//! - **Space**: data + one 64-bit count per 64-bit block + one per
//!   1024-bit super-block.
//!
//! ## What Could Go Wrong
//!
//! 1. **Off-by-one at the top**: `rank1(len)` must count a set final
//!    bit. Clamping to the last *position* instead of the length drops
//!    it.
//! 2. **Wrong search predicate**: both select searches need "last entry
//!    strictly less than k", not the usual lower/upper bound. A block
//!    whose prefix count *equals* k holds no part of the answer.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`BitVector`]**: packed bit storage built by projecting any
//!   slice through a predicate.
//! - **[`RankSelect`]**: the immutable two-level index.
//! - **[`ImplicitBitVector`]**: zero-overhead linear baseline.
//! - **[`combinatorial`]**: the standalone 15-bit (class, offset)
//!   codec.
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Succinct Static Data Structures."
//! - Raman, R., Raman, V., & Rao, S. S. (2002). "Succinct indexable
//!   dictionaries."
//! - Vigna, S. (2008). "Broadword implementation of rank/select
//!   queries."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod combinatorial;
pub mod error;
pub mod implicit;
pub mod rank_select;

pub use bitvec::BitVector;
pub use error::Error;
pub use implicit::ImplicitBitVector;
pub use rank_select::RankSelect;
