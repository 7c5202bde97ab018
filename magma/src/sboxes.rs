/// Substitution table from GOST R 34.12-2015, Annex A.
///
/// Row `i` substitutes the `i`-th nibble of a 32-bit word, counting from the
/// least significant one.
pub const SBOX: [[u8; 16]; 8] = [
    [12, 4, 6, 2, 10, 5, 11, 9, 14, 8, 13, 7, 0, 3, 15, 1],
    [6, 8, 2, 3, 9, 10, 5, 12, 1, 11, 7, 13, 0, 4, 15, 14],
    [7, 11, 5, 8, 12, 4, 2, 0, 14, 1, 3, 10, 9, 15, 6, 13],
    [13, 1, 7, 4, 11, 5, 0, 15, 3, 12, 14, 6, 9, 10, 2, 8],
    [5, 10, 15, 12, 1, 13, 14, 11, 8, 3, 6, 0, 4, 7, 9, 2],
    [14, 5, 0, 15, 13, 11, 3, 6, 9, 2, 12, 7, 1, 8, 10, 4],
    [11, 13, 12, 3, 7, 14, 10, 5, 0, 9, 4, 15, 2, 8, 1, 6],
    [15, 12, 9, 7, 3, 0, 11, 4, 1, 14, 2, 13, 6, 10, 8, 5],
];

/// Substitute `nibble` using row `row` of [`SBOX`].
///
/// # Panics
/// If `row >= 8` or `nibble >= 16`.
#[inline(always)]
pub fn sbox(row: usize, nibble: u8) -> u8 {
    assert!(nibble < 16, "nibble out of range: {}", nibble);
    SBOX[row][nibble as usize]
}
