//! Population Counter Tests
//!
//! Deterministic tests for the summation tree:
//!   - Empty and full vectors at several widths
//!   - Sparse and structured patterns
//!   - Word-mode upper-half masking

use rvalu_core::core::units::popcount::PopulationCounter;

// ═════════════════════════════════════════════════════════════════════════════
//  Full width
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn count_zero_is_zero() {
    assert_eq!(PopulationCounter::<64>::count(0, false), 0);
}

#[test]
fn count_all_ones_is_64() {
    assert_eq!(PopulationCounter::<64>::count(u64::MAX, false), 64);
}

#[test]
fn count_single_bit_each_nibble_boundary() {
    assert_eq!(PopulationCounter::<64>::count(1, false), 1);
    assert_eq!(PopulationCounter::<64>::count(1 << 31, false), 1);
    assert_eq!(PopulationCounter::<64>::count(1 << 63, false), 1);
}

#[test]
fn count_alternating_bytes() {
    assert_eq!(
        PopulationCounter::<64>::count(0xFF00_FF00_FF00_FF00, false),
        32
    );
}

#[test]
fn count_alternating_bits() {
    assert_eq!(
        PopulationCounter::<64>::count(0xAAAA_AAAA_AAAA_AAAA, false),
        32
    );
}

#[test]
fn count_adjacent_carries_inside_tree() {
    // Pairs of adjacent set bits stress the stage-to-stage partial sums.
    assert_eq!(PopulationCounter::<64>::count(0xC3C3, false), 8);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Word mode
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn word_mode_masks_upper_half() {
    assert_eq!(
        PopulationCounter::<64>::count(0xFFFF_FFFF_0000_0000, true),
        0
    );
}

#[test]
fn word_mode_counts_low_half_fully() {
    assert_eq!(PopulationCounter::<64>::count(u64::MAX, true), 32);
}

#[test]
fn word_mode_mixed() {
    assert_eq!(
        PopulationCounter::<64>::count(0xDEAD_0000_0000_00FF, true),
        8
    );
}

// ═════════════════════════════════════════════════════════════════════════════
//  Narrow-width instantiations
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn width_8_counts() {
    assert_eq!(PopulationCounter::<8>::count(0xFF, false), 8);
    assert_eq!(PopulationCounter::<8>::count(0xFFFF_FF00, false), 0);
}

#[test]
fn width_32_ignores_high_half() {
    assert_eq!(
        PopulationCounter::<32>::count(0xFFFF_FFFF_0000_000F, false),
        4
    );
}
