//! Codec implementations for variable-length arrays.
//!
//! An XDR `T name<MAX>` is written as a `u32` element count followed by each element in order.
//! [VecM] carries `MAX` in its type; [Vec] is bounded by a [RangeCfg] supplied at decode time.
//!
//! Decoding never trusts the count for allocation: the count is checked against the bound first,
//! and the initial capacity is further capped by the number of bytes left in the buffer.

use crate::{
    util::{read_len, read_len_cfg, write_len},
    EncodeSize, Error, FixedSize, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut};
use std::ops::Deref;

/// An array of at most `MAX` elements.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VecM<T, const MAX: u32 = { u32::MAX }>(Vec<T>);

impl<T, const MAX: u32> VecM<T, MAX> {
    /// Creates an empty array.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The maximum number of elements this type can hold.
    pub const fn max_len() -> usize {
        MAX as usize
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consumes the array, returning the underlying elements.
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Clone, const MAX: u32> VecM<T, MAX> {
    /// Returns a copy of `self` with `item` appended, if the result stays within `MAX`.
    pub fn with_pushed(&self, item: T) -> Result<Self, Error> {
        let mut next = Vec::with_capacity(self.0.len() + 1);
        next.extend_from_slice(&self.0);
        next.push(item);
        Self::try_from(next)
    }

    /// Returns a copy of `self` with the element at `index` replaced, or `None` if `index` is
    /// out of bounds.
    pub fn with_replaced(&self, index: usize, item: T) -> Option<Self> {
        if index >= self.0.len() {
            return None;
        }
        let mut next = self.0.clone();
        next[index] = item;
        Some(Self(next))
    }
}

impl<T, const MAX: u32> Default for VecM<T, MAX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const MAX: u32> TryFrom<Vec<T>> for VecM<T, MAX> {
    type Error = Error;

    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        if value.len() > Self::max_len() {
            return Err(Error::LengthExceeded(value.len(), Self::max_len()));
        }
        Ok(Self(value))
    }
}

impl<T: Clone, const MAX: u32> TryFrom<&[T]> for VecM<T, MAX> {
    type Error = Error;

    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        Self::try_from(value.to_vec())
    }
}

impl<T, const MAX: u32> From<VecM<T, MAX>> for Vec<T> {
    fn from(value: VecM<T, MAX>) -> Self {
        value.0
    }
}

impl<T, const MAX: u32> AsRef<[T]> for VecM<T, MAX> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const MAX: u32> Deref for VecM<T, MAX> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<'a, T, const MAX: u32> IntoIterator for &'a VecM<T, MAX> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Write, const MAX: u32> Write for VecM<T, MAX> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl<T: EncodeSize, const MAX: u32> EncodeSize for VecM<T, MAX> {
    #[inline]
    fn encode_size(&self) -> usize {
        self.0.encode_size()
    }
}

impl<T: Read, const MAX: u32> Read for VecM<T, MAX> {
    type Cfg = T::Cfg;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<Self, Error> {
        let len = read_len(buf, MAX)?;
        read_elements(buf, len, cfg).map(Self)
    }
}

// Vec implementation
impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(self.len(), buf);
        for item in self {
            item.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        u32::SIZE + self.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

impl<T: Read> Read for Vec<T> {
    type Cfg = (RangeCfg, T::Cfg);

    #[inline]
    fn read_cfg(buf: &mut impl Buf, (range, cfg): &Self::Cfg) -> Result<Self, Error> {
        let len = read_len_cfg(buf, range)?;
        read_elements(buf, len, cfg)
    }
}

/// Reads `len` elements whose count has already been validated.
fn read_elements<T: Read>(buf: &mut impl Buf, len: usize, cfg: &T::Cfg) -> Result<Vec<T>, Error> {
    let mut vec = Vec::with_capacity(len.min(buf.remaining()));
    for _ in 0..len {
        vec.push(T::read_cfg(buf, cfg)?);
    }
    Ok(vec)
}
