//! Carrier types for the bit-packed boolean tags.
//!
//! Both types use the same bit order: bit `i % 8` of a byte is taken
//! least-significant-bit first, so the first boolean lands in the 0x01 bit.
//! `[true, false, true, true, false, false, false, true]` packs to
//! `0b1000_1101`.

/// Up to eight independent boolean flags packed into a single byte.
///
/// This is the payload of the Boolean tag. Flag `i` lives in bit `i`,
/// least-significant-bit first. Bits above the number of flags provided at
/// construction are zero. The flag count itself is not stored: the wire
/// format carries one raw octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    /// Pack up to 8 flags. Flags beyond the eighth are ignored.
    pub fn new(flags: &[bool]) -> Self {
        let mut bits = 0u8;
        for (i, &flag) in flags.iter().take(8).enumerate() {
            if flag {
                bits |= 1 << i;
            }
        }
        Flags(bits)
    }

    /// Reconstruct from a raw octet, as read off the wire.
    pub fn from_bits(bits: u8) -> Self {
        Flags(bits)
    }

    /// The raw octet, as written to the wire.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Get flag `index`. Indices 8 and above are always false.
    pub fn get(self, index: usize) -> bool {
        index < 8 && self.0 & (1 << index) != 0
    }

    /// Set flag `index` to `value`. Indices 8 and above are ignored.
    pub fn set(&mut self, index: usize, value: bool) {
        if index < 8 {
            if value {
                self.0 |= 1 << index;
            } else {
                self.0 &= !(1 << index);
            }
        }
    }
}

/// A boolean array stored 8 elements per byte.
///
/// Logically identical to the plain BooleanArray tag, differing only in
/// storage density: `ceil(len / 8)` bytes on the wire rather than one byte
/// per element. Element `i` lives in byte `i / 8`, bit `i % 8`
/// (least-significant-bit first).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedBoolArray {
    len: usize,
    bits: Vec<u8>,
}

impl PackedBoolArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruct from packed bytes and an element count, as read off the
    /// wire. `bits` must hold exactly `ceil(len / 8)` bytes.
    pub(crate) fn from_parts(len: usize, bits: Vec<u8>) -> Self {
        debug_assert_eq!(bits.len(), len.div_ceil(8));
        PackedBoolArray { len, bits }
    }

    /// The packed bytes, `ceil(len / 8)` of them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get element `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index < self.len {
            Some(self.bits[index / 8] & (1 << (index % 8)) != 0)
        } else {
            None
        }
    }

    /// Set element `index`. Panics if `index` is out of bounds, matching
    /// slice indexing.
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len, "index {} out of bounds", index);
        if value {
            self.bits[index / 8] |= 1 << (index % 8);
        } else {
            self.bits[index / 8] &= !(1 << (index % 8));
        }
    }

    pub fn push(&mut self, value: bool) {
        if self.len % 8 == 0 {
            self.bits.push(0);
        }
        self.len += 1;
        self.set(self.len - 1, value);
    }

    /// Iterate the elements in order, like `Vec::iter` but by value.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bits[i / 8] & (1 << (i % 8)) != 0)
    }
}

impl FromIterator<bool> for PackedBoolArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut arr = PackedBoolArray::new();
        for value in iter {
            arr.push(value);
        }
        arr
    }
}

impl From<&[bool]> for PackedBoolArray {
    fn from(bools: &[bool]) -> Self {
        bools.iter().copied().collect()
    }
}
