//! Bit level access to the packed 32-bit connection words, and small helpers shared by the decoders.

use core::fmt;

/// number of bits in a connection word
pub const WORD_BITS: u8 = 32;

/// mask of the `width` least significant bits, saturating at 64 bits
const fn low_mask(width: u8) -> u64 {
    if width >= 64 {u64::MAX} else {(1 << width) - 1}
}

/**
    extract the unsigned value occupying `width` bits from bit `start` in `word`, bit 0 being the least significant

    The value is returned right-justified. A range not fitting in the word is a programming error: debug builds panic, release builds only keep the bits actually present in the word.
*/
pub fn extract(word: u32, start: u8, width: u8) -> u32 {
    debug_assert!(start < WORD_BITS, "bit range starts at {} out of a 32 bits word", start);
    debug_assert!(u16::from(start) + u16::from(width) <= u16::from(WORD_BITS),
        "bit range {}..{} exceeds a 32 bits word", start, u16::from(start) + u16::from(width));
    let shifted = u64::from(word).checked_shr(start.into()).unwrap_or(0);
    (shifted & low_mask(width)) as u32
}

/**
    write the `width` least significant bits of `value` at bit `start` in `word`, other bits of `word` are kept

    Range constraints are the same as [extract]. Bits of `value` above `width` are dropped.
*/
pub fn insert(word: u32, start: u8, width: u8, value: u32) -> u32 {
    debug_assert!(start < WORD_BITS, "bit range starts at {} out of a 32 bits word", start);
    debug_assert!(u16::from(start) + u16::from(width) <= u16::from(WORD_BITS),
        "bit range {}..{} exceeds a 32 bits word", start, u16::from(start) + u16::from(width));
    let mask = low_mask(width);
    let field = mask.checked_shl(start.into()).unwrap_or(0);
    let value = (u64::from(value) & mask).checked_shl(start.into()).unwrap_or(0);
    ((u64::from(word) & ! field) | value) as u32
}

/**
    locate a sub-value in a connection word by its bit position and length

    It acts like a getter/setter of a value in a word. It does not hold the word, only the place of the value in it, so the layouts of the connection words can be written as `const` tables.
*/
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitRange {
    /// least significant bit of the range
    pub bit: u8,
    /// bit length of the range
    pub len: u8,
}
impl BitRange {
    pub const fn new(bit: u8, len: u8) -> Self {
        Self {bit, len}
    }
    /// bit following the last bit of the range
    pub const fn end(&self) -> u8 {
        self.check();
        self.bit + self.len
    }
    /// mask of the range bits in place in the word
    pub const fn mask(&self) -> u32 {
        self.check();
        (low_mask(self.len) << self.bit) as u32
    }
    /// same contract as [extract]: the range must fit in a 32 bits word
    const fn check(&self) {
        debug_assert!(self.bit < WORD_BITS, "bit range starts out of a 32 bits word");
        debug_assert!(self.len <= WORD_BITS - self.bit, "bit range exceeds a 32 bits word");
    }
    /// extract the value pointed by the range in the given word
    pub fn extract(&self, word: u32) -> u32   {extract(word, self.bit, self.len)}
    /// return the given word with the pointed range replaced by `value`
    pub fn insert(&self, word: u32, value: u32) -> u32   {insert(word, self.bit, self.len, value)}
}
impl fmt::Debug for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitRange{{{}, {}}}", self.bit, self.len)
    }
}

/**
    value of an enumerated field: either a code listed in `T`, or a reserved code kept as its raw bits `R`

    Unknown codes are not errors, they are expected from newer devices or vendor extensions, so the raw code is kept for display and for rebuilding the word.
*/
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Code<T, R> {
    Known(T),
    Reserved(R),
}
impl<T: TryFrom<R>, R: Copy> Code<T, R> {
    /// look the raw code up in the enumeration `T`
    pub fn lookup(raw: R) -> Self {
        T::try_from(raw).map_or(Self::Reserved(raw), Self::Known)
    }
}
impl<T: Copy, R: Copy> Code<T, R> {
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Reserved(_) => None,
        }
    }
    pub fn is_known(&self) -> bool   {self.known().is_some()}
    /// true if this is the known code `value`
    pub fn is(&self, value: T) -> bool
    where T: PartialEq
    {
        self.known() == Some(value)
    }
    /// raw bits of the code, as found in the word
    pub fn code(&self) -> R
    where T: Into<R>
    {
        match self {
            Self::Known(value) => (*value).into(),
            Self::Reserved(raw) => *raw,
        }
    }
}

/// format a complete word the way EDS files write it, like `0x0000001E`
pub fn hex32(value: u32) -> String   {format!("0x{:08X}", value)}
/// format a 16-bit code, like `0x0001`
pub fn hex16(value: u16) -> String   {format!("0x{:04X}", value)}
/// format an 8-bit code, like `0x0A`
pub fn hex8(value: u8) -> String   {format!("0x{:02X}", value)}
