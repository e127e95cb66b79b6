//! The reference permutation table and the lattice-cell hash resolver.

/// Ken Perlin's reference permutation of `0..=255`.
#[rustfmt::skip]
const REFERENCE: [u8; 256] = [
    151, 160, 137,  91,  90,  15, 131,  13, 201,  95,  96,  53, 194, 233,   7, 225,
    140,  36, 103,  30,  69, 142,   8,  99,  37, 240,  21,  10,  23, 190,   6, 148,
    247, 120, 234,  75,   0,  26, 197,  62,  94, 252, 219, 203, 117,  35,  11,  32,
     57, 177,  33,  88, 237, 149,  56,  87, 174,  20, 125, 136, 171, 168,  68, 175,
     74, 165,  71, 134, 139,  48,  27, 166,  77, 146, 158, 231,  83, 111, 229, 122,
     60, 211, 133, 230, 220, 105,  92,  41,  55,  46, 245,  40, 244, 102, 143,  54,
     65,  25,  63, 161,   1, 216,  80,  73, 209,  76, 132, 187, 208,  89,  18, 169,
    200, 196, 135, 130, 116, 188, 159,  86, 164, 100, 109, 198, 173, 186,   3,  64,
     52, 217, 226, 250, 124, 123,   5, 202,  38, 147, 118, 126, 255,  82,  85, 212,
    207, 206,  59, 227,  47,  16,  58,  17, 182, 189,  28,  42, 223, 183, 170, 213,
    119, 248, 152,   2,  44, 154, 163,  70, 221, 153, 101, 155, 167,  43, 172,   9,
    129,  22,  39, 253,  19,  98, 108, 110,  79, 113, 224, 232, 178, 185, 112, 104,
    218, 246,  97, 228, 251,  34, 242, 193, 238, 210, 144,  12, 191, 179, 162, 241,
     81,  51, 145, 235, 249,  14, 239, 107,  49, 192, 214,  31, 181, 199, 106, 157,
    184,  84, 204, 176, 115, 121,  50,  45, 127,   4, 150, 254, 138, 236, 205,  93,
    222, 114,  67,  29,  24,  72, 243, 141, 128, 195,  78,  66, 215,  61, 156, 180,
];

/// The reference permutation repeated twice.
///
/// Entries `256..512` mirror `0..256`, so `P[i] + j` with `i, j <= 256` can be
/// looked up again without masking.
pub static PERMUTATION: [u8; 512] = mirror(&REFERENCE);

const fn mirror(src: &[u8; 256]) -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        out[i] = src[i & 0xFF];
        i += 1;
    }
    out
}

#[inline]
fn p(index: usize) -> usize {
    usize::from(PERMUTATION[index])
}

/// Hashes of the eight corners of a lattice cell.
///
/// Each letter is one axis in `x, y, z` order: `a` selects the base index and
/// `b` the index plus one. `bab` is therefore the corner `(x + 1, y, z + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerHashes {
    /// Corner `(x, y, z)`.
    pub aaa: u8,
    /// Corner `(x, y + 1, z)`.
    pub aba: u8,
    /// Corner `(x, y, z + 1)`.
    pub aab: u8,
    /// Corner `(x, y + 1, z + 1)`.
    pub abb: u8,
    /// Corner `(x + 1, y, z)`.
    pub baa: u8,
    /// Corner `(x + 1, y + 1, z)`.
    pub bba: u8,
    /// Corner `(x + 1, y, z + 1)`.
    pub bab: u8,
    /// Corner `(x + 1, y + 1, z + 1)`.
    pub bbb: u8,
}

/// Resolve the corner hashes of the cell whose base corner is `(xi, yi, zi)`.
///
/// Each corner hash is `P[P[P[x] + y] + z]` for that corner's indices.
#[must_use]
pub fn resolve_hashes(xi: u8, yi: u8, zi: u8) -> CornerHashes {
    let (x, y, z) = (usize::from(xi), usize::from(yi), usize::from(zi));

    let a = p(x);
    let b = p(x + 1);
    let aa = p(a + y);
    let ab = p(a + y + 1);
    let ba = p(b + y);
    let bb = p(b + y + 1);

    CornerHashes {
        aaa: PERMUTATION[aa + z],
        aba: PERMUTATION[ab + z],
        aab: PERMUTATION[aa + z + 1],
        abb: PERMUTATION[ab + z + 1],
        baa: PERMUTATION[ba + z],
        bba: PERMUTATION[bb + z],
        bab: PERMUTATION[ba + z + 1],
        bbb: PERMUTATION[bb + z + 1],
    }
}
