//! Carry-less multiplier.
//!
//! Polynomial multiplication over GF(2): each product bit is the XOR of all
//! operand bit pairs whose indices sum to that position. The unit is built
//! the way the hardware replicates it:
//! 1. **Base case (width 8):** an explicit bit matrix — 15 output bits, each
//!    XOR-reducing its diagonal of AND terms.
//! 2. **Recursive case:** Karatsuba three-way split into half-width
//!    sub-products `low`, `high`, and `mid = clmul(al ^ ah, bl ^ bh)`,
//!    recombined as `concat(high, low) ^ ((mid ^ low ^ high) << W/2)`.
//!
//! The recursion uses `3^log2(W/8)` base multiplies instead of the `W^2`
//! bit-products of a flat matrix — the area/depth tradeoff this unit exists
//! to model, so the recursion must not be flattened into a dense 64-bit
//! matrix.

use crate::common::bits::ones;

/// Narrowest width handled by the explicit bit matrix.
const BASE_WIDTH: usize = 8;

/// Carry-less multiplier for widths 8 through 64.
#[derive(Debug)]
pub struct CarrylessMultiplier;

impl CarrylessMultiplier {
    /// Returns the `2 * width`-bit carry-less product of the low `width`
    /// bits of `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not a power of two in `8..=64`; the Karatsuba
    /// split is ill-formed for any other width.
    pub fn product(a: u64, b: u64, width: usize) -> u128 {
        assert!(
            width.is_power_of_two() && (BASE_WIDTH..=64).contains(&width),
            "carry-less multiply width must be a power of two in 8..=64"
        );
        Self::product_recursive(a & ones(width), b & ones(width), width)
    }

    /// Recursion bottoming out in the bit matrix at width 8; each level
    /// spawns three half-width sub-products.
    fn product_recursive(a: u64, b: u64, width: usize) -> u128 {
        if width == BASE_WIDTH {
            return u128::from(Self::multiply_base(a as u8, b as u8));
        }

        let half = width / 2;
        let mask = ones(half);
        let (a_low, a_high) = (a & mask, a >> half);
        let (b_low, b_high) = (b & mask, b >> half);

        let low = Self::product_recursive(a_low, b_low, half);
        let high = Self::product_recursive(a_high, b_high, half);
        let mid = Self::product_recursive(a_low ^ a_high, b_low ^ b_high, half);

        ((high << width) | low) ^ ((mid ^ low ^ high) << half)
    }

    /// 8x8 carry-less multiply via the explicit bit matrix.
    ///
    /// Output bit `i` (0-14) XOR-reduces `a[i - j] & b[j]` over every `j`
    /// with both indices in range; the 15-bit result is zero-extended to 16.
    fn multiply_base(a: u8, b: u8) -> u16 {
        let mut product = 0u16;
        let mut i = 0;
        while i < 2 * BASE_WIDTH - 1 {
            let mut bit = 0u16;
            let mut j = 0;
            while j < BASE_WIDTH {
                if i >= j && i - j < BASE_WIDTH {
                    bit ^= u16::from((a >> (i - j)) & 1) & u16::from((b >> j) & 1);
                }
                j += 1;
            }
            product |= bit << i;
            i += 1;
        }
        product
    }
}
