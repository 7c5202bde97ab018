use crate::sboxes::sbox;

/// Round function `g[k](a)`.
///
/// Adds the round key modulo 2^32, rotates the sum left by 11 bits and then
/// passes every nibble through its row of the substitution table.
#[inline]
pub fn g(a: u32, k: u32) -> u32 {
    let t = a.wrapping_add(k).rotate_left(11);
    (0..8).fold(0u32, |acc, i| {
        let nibble = ((t >> (4 * i)) & 0xF) as u8;
        acc | u32::from(sbox(i, nibble)) << (4 * i)
    })
}
