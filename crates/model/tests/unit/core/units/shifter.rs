//! Barrel Shifter Tests
//!
//! Deterministic edge-case tests for every kind/direction/mode combination:
//!   - Boundary shift amounts (0, 1, 31, 32, 63) and amount masking
//!   - Sign-fill behavior for arithmetic shifts
//!   - Rotate wraparound in both directions
//!   - Word-mode pre/post conditioning (zero/sign-extension, half
//!     duplication for rotates, 5-bit amount masking)
//!   - The unsigned-extend path used by `slli.uw`
//!   - Narrow-width instantiations

use rstest::rstest;
use rvalu_core::core::signals::{ShiftDir, ShiftKind};
use rvalu_core::core::units::shifter::Shifter;

use crate::common::sext32;

// ─── Constants ───────────────────────────────────────────────────────────────

const ONE: u64 = 1;
const NEG1: u64 = u64::MAX;
const I64_MIN: u64 = i64::MIN as u64; // 0x8000_0000_0000_0000

// ─── Helper ──────────────────────────────────────────────────────────────────

fn shift64(value: u64, amount: u64, kind: ShiftKind, dir: ShiftDir) -> u64 {
    Shifter::<64>::shift(value, amount, kind, dir, false, false)
}

fn shift_word(value: u64, amount: u64, kind: ShiftKind, dir: ShiftDir) -> u64 {
    Shifter::<64>::shift(value, amount, kind, dir, true, false)
}

// ═════════════════════════════════════════════════════════════════════════════
//  Logical shifts
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(0xDEAD_BEEF, 0, 0xDEAD_BEEF)]
#[case(ONE, 1, 2)]
#[case(ONE, 63, I64_MIN)]
#[case(NEG1, 63, I64_MIN)]
#[case(NEG1, 1, NEG1 - 1)]
#[case(0, 32, 0)]
fn sll_cases(#[case] value: u64, #[case] amount: u64, #[case] expected: u64) {
    assert_eq!(
        shift64(value, amount, ShiftKind::Logical, ShiftDir::Left),
        expected
    );
}

#[rstest]
#[case(0xDEAD_BEEF, 0, 0xDEAD_BEEF)]
#[case(0x10, 4, 1)]
#[case(I64_MIN, 63, 1)]
#[case(NEG1, 63, 1)]
#[case(ONE, 1, 0)]
fn srl_cases(#[case] value: u64, #[case] amount: u64, #[case] expected: u64) {
    assert_eq!(
        shift64(value, amount, ShiftKind::Logical, ShiftDir::Right),
        expected
    );
}

/// Only the low 6 bits of the amount participate at full width.
#[test]
fn amount_masked_to_6_bits() {
    assert_eq!(shift64(0xABCD, 64, ShiftKind::Logical, ShiftDir::Left), 0xABCD);
    assert_eq!(shift64(0xABCD, 65, ShiftKind::Logical, ShiftDir::Left), 0xABCD << 1);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Arithmetic shifts
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(I64_MIN, 1, 0xC000_0000_0000_0000)]
#[case(I64_MIN, 63, NEG1)]
#[case(NEG1, 17, NEG1)]
#[case(0x7FFF_FFFF_FFFF_FFFF, 1, 0x3FFF_FFFF_FFFF_FFFF)]
#[case(0x7FFF_FFFF_FFFF_FFFF, 63, 0)]
fn sra_cases(#[case] value: u64, #[case] amount: u64, #[case] expected: u64) {
    assert_eq!(
        shift64(value, amount, ShiftKind::Arithmetic, ShiftDir::Right),
        expected
    );
}

/// The sign fill tracks the stage value: once negative, stays negative
/// through every stage combination (here amount 0b101011 exercises stages
/// 0, 1, 3, and 5).
#[test]
fn sra_multi_stage_sign_fill() {
    let expected = ((i64::MIN) >> 43) as u64;
    assert_eq!(
        shift64(I64_MIN, 43, ShiftKind::Arithmetic, ShiftDir::Right),
        expected
    );
}

// ═════════════════════════════════════════════════════════════════════════════
//  Rotates
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn ror_wraps_low_bit_to_top() {
    assert_eq!(
        shift64(0x8000_0000_0000_0001, 1, ShiftKind::Rotate, ShiftDir::Right),
        0xC000_0000_0000_0000
    );
}

#[test]
fn rol_wraps_top_bit_to_bottom() {
    assert_eq!(shift64(I64_MIN, 1, ShiftKind::Rotate, ShiftDir::Left), 1);
}

#[rstest]
#[case(0xDEAD_BEEF_CAFE_BABE, 0)]
#[case(0xDEAD_BEEF_CAFE_BABE, 1)]
#[case(0xDEAD_BEEF_CAFE_BABE, 13)]
#[case(0xDEAD_BEEF_CAFE_BABE, 32)]
#[case(0xDEAD_BEEF_CAFE_BABE, 63)]
fn rotate_matches_native(#[case] value: u64, #[case] amount: u32) {
    assert_eq!(
        shift64(value, u64::from(amount), ShiftKind::Rotate, ShiftDir::Right),
        value.rotate_right(amount)
    );
    assert_eq!(
        shift64(value, u64::from(amount), ShiftKind::Rotate, ShiftDir::Left),
        value.rotate_left(amount)
    );
}

// ═════════════════════════════════════════════════════════════════════════════
//  Word mode
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn sllw_sign_extends_result() {
    // 1 << 31 lands in the sign bit of the word.
    assert_eq!(
        shift_word(ONE, 31, ShiftKind::Logical, ShiftDir::Left),
        sext32(0x8000_0000)
    );
}

#[test]
fn sllw_ignores_high_operand_half() {
    assert_eq!(
        shift_word(0xFFFF_FFFF_0000_0001, 1, ShiftKind::Logical, ShiftDir::Left),
        2
    );
}

#[test]
fn srlw_zero_extends_operand_then_sign_extends_result() {
    // Logical right by 0 still sign-extends the 32-bit result from bit 31.
    assert_eq!(
        shift_word(0x8000_0000, 0, ShiftKind::Logical, ShiftDir::Right),
        sext32(0x8000_0000)
    );
    assert_eq!(
        shift_word(0x8000_0000, 31, ShiftKind::Logical, ShiftDir::Right),
        1
    );
}

#[test]
fn sraw_sign_fills_from_bit_31() {
    assert_eq!(
        shift_word(0x8000_0000, 1, ShiftKind::Arithmetic, ShiftDir::Right),
        sext32(0xC000_0000)
    );
}

#[test]
fn word_amount_masked_to_5_bits() {
    // Amount 32 masks to 0 in word mode.
    assert_eq!(
        shift_word(0x1234_5678, 32, ShiftKind::Logical, ShiftDir::Left),
        0x1234_5678
    );
}

#[test]
fn rorw_rotates_within_the_low_half() {
    assert_eq!(
        shift_word(ONE, 1, ShiftKind::Rotate, ShiftDir::Right),
        sext32(0x8000_0000)
    );
}

#[test]
fn rolw_rotates_within_the_low_half() {
    assert_eq!(
        shift_word(0x8000_0001, 1, ShiftKind::Rotate, ShiftDir::Left),
        3
    );
}

#[rstest]
#[case(0xCAFE_BABE, 7)]
#[case(0xCAFE_BABE, 19)]
#[case(0xCAFE_BABE, 31)]
fn word_rotate_matches_native_u32(#[case] value: u32, #[case] amount: u32) {
    assert_eq!(
        shift_word(u64::from(value), u64::from(amount), ShiftKind::Rotate, ShiftDir::Right),
        sext32(value.rotate_right(amount))
    );
    assert_eq!(
        shift_word(u64::from(value), u64::from(amount), ShiftKind::Rotate, ShiftDir::Left),
        sext32(value.rotate_left(amount))
    );
}

// ═════════════════════════════════════════════════════════════════════════════
//  Unsigned-extend path (slli.uw)
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn uext_zero_extends_before_full_width_shift() {
    let out = Shifter::<64>::shift(
        0xFFFF_FFFF_FFFF_FFFF,
        4,
        ShiftKind::Logical,
        ShiftDir::Left,
        false,
        true,
    );
    assert_eq!(out, 0xF_FFFF_FFF0);
}

#[test]
fn uext_amount_uses_all_6_bits() {
    let out = Shifter::<64>::shift(ONE, 63, ShiftKind::Logical, ShiftDir::Left, false, true);
    assert_eq!(out, I64_MIN);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Narrow-width instantiations
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn width_8_arithmetic_right() {
    assert_eq!(
        Shifter::<8>::shift(0x80, 1, ShiftKind::Arithmetic, ShiftDir::Right, false, false),
        0xC0
    );
}

#[test]
fn width_8_rotate_right() {
    assert_eq!(
        Shifter::<8>::shift(0x01, 1, ShiftKind::Rotate, ShiftDir::Right, false, false),
        0x80
    );
}

#[test]
fn width_32_left_shift_drops_carried_out_bits() {
    assert_eq!(
        Shifter::<32>::shift(0xFFFF_FFFF, 4, ShiftKind::Logical, ShiftDir::Left, false, false),
        0xFFFF_FFF0
    );
}
