//! Layout constants shared by the samplers, the compactor and the linearizer.
//!
//! # Location Codes
//!
//! A location code stores one octant index per subdivision as a base-8 digit.
//! The first subdivision below the root occupies the lowest digit:
//!
//! ```text
//! path:   root ─ 3 ─ 5 ─ 1
//! code:   3 + 5 * 8 + 1 * 64 = 107   (octal 153)
//! depth:  3
//! ```
//!
//! Codes are `u32` to match the per-instance attribute width consumed by the
//! GPU, so a packed path holds at most [`MAX_DEPTH`] digits.

/// Number of children of an internal node.
pub const CHILD_COUNT: usize = 8;

/// Bits consumed by one octant digit of a location code.
pub const OCTANT_BITS: u32 = 3;

/// Radix of a location code digit.
pub const CODE_RADIX: u32 = 1 << OCTANT_BITS; // 8

/// Deepest subdivision a `u32` location code can address (30 bits).
///
/// Construction cost also grows as `8^depth`, so trees deeper than this are
/// impractical regardless of the code width.
pub const MAX_DEPTH: u32 = u32::BITS / OCTANT_BITS;

/// Number of cells at the finest level of a full tree of `depth`.
#[inline]
pub const fn cells_at_depth(depth: u32) -> u64 {
  1u64 << (OCTANT_BITS * depth)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
