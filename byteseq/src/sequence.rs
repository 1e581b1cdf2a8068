/*
    This file is part of byteseq.

    byteseq is free software: you can redistribute it and/or modify
    it under the terms of the GNU Lesser General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    byteseq is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU Lesser General Public License
    along with byteseq. (LICENSE.md)  If not, see <https://www.gnu.org/licenses/>.
*/
//! Fixed-width byte sequences.

use std::io::{Read, Write};

use nom::bytes::complete::take;
use nom::IResult;

use crate::cast::{underlying_cast, value_cast, Fits, Scalar, Word};
use crate::error::Error;
use crate::{ReadWrite, Result};

/// A sequence of 2, 4 or 8 raw bytes, stored as the word `W`.
///
/// A byte sequence can hold any [`Scalar`] no wider than `W`, either as-is or with its bytes
/// swapped. The sequence does not remember the type of the value; it is reinterpreted only when
/// it is retrieved.
///
/// ```
/// use byteseq::ByteSequence4;
///
/// let s1 = ByteSequence4::new(1.5f32);
/// let s2 = ByteSequence4::with_swap(7i32, true);
/// assert_eq!(s1.value::<f32>(), 1.5);
/// assert_eq!(s2.value_swapped::<i32>(), 7);
/// ```
///
/// Values wider than the sequence do not build:
///
/// ```compile_fail
/// let _ = byteseq::ByteSequence4::new(1u64);
/// ```
///
/// Neither do widths other than 2, 4 and 8:
///
/// ```compile_fail
/// let _ = byteseq::ByteSequence::<u8>::default();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSequence<W: Word> {
    word: W,
}

/// A sequence of 2 bytes.
pub type ByteSequence2 = ByteSequence<u16>;
/// A sequence of 4 bytes.
pub type ByteSequence4 = ByteSequence<u32>;
/// A sequence of 8 bytes.
pub type ByteSequence8 = ByteSequence<u64>;

impl<W: Word> ByteSequence<W> {
    /// Number of bytes in the sequence.
    pub const WIDTH: usize = W::WIDTH;

    /// A sequence with all bytes set to zero.
    #[inline]
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Creates a sequence holding `x` without swapping.
    #[inline]
    pub fn new<T: Scalar>(x: T) -> Self {
        let () = Fits::<T, W>::OK;
        Self { word: underlying_cast(x) }
    }

    /// Creates a sequence holding `x`, swapping its bytes if `swap` is true.
    #[inline]
    pub fn with_swap<T: Scalar>(x: T, swap: bool) -> Self {
        let seq = Self::new(x);
        if swap {
            seq.swapped()
        } else {
            seq
        }
    }

    /// Creates a sequence holding `x` with its bytes swapped.
    #[inline]
    pub fn new_swapped<T: Scalar>(x: T) -> Self {
        Self::new(x).swapped()
    }

    #[inline]
    pub fn from_word(word: W) -> Self {
        Self { word }
    }

    /// Creates a sequence from raw bytes in memory order.
    #[inline]
    pub fn from_bytes(bytes: W::Bytes) -> Self {
        Self { word: W::from_ne_bytes(bytes) }
    }

    #[inline]
    pub fn word(&self) -> W {
        self.word
    }

    /// The raw bytes in memory order, exactly as [`write_to`](ReadWrite::write_to) emits them.
    #[inline]
    pub fn bytes(&self) -> W::Bytes {
        self.word.to_ne_bytes()
    }

    /// Returns a copy of this sequence with all `WIDTH` bytes reversed.
    #[inline]
    pub fn swapped(self) -> Self {
        Self { word: self.word.swapped() }
    }

    /// Reinterprets the stored bytes as `T`.
    #[inline]
    pub fn value<T: Scalar>(&self) -> T {
        value_cast(self.word)
    }

    /// Reinterprets the stored bytes as `T` after swapping them.
    #[inline]
    pub fn value_swapped<T: Scalar>(&self) -> T {
        value_cast(self.word.swapped())
    }

    /// Reinterprets the stored bytes as `T`, swapping them first if `swap` is true.
    #[inline]
    pub fn value_with<T: Scalar>(&self, swap: bool) -> T {
        if swap {
            self.value_swapped()
        } else {
            self.value()
        }
    }

    /// Replaces the stored bytes with `WIDTH` bytes from `reader`.
    ///
    /// The bytes are taken as they are, without swapping. On failure the sequence is left
    /// untouched.
    pub fn read<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        *self = Self::read_from(reader)?;
        Ok(())
    }

    /// Writes the stored bytes to `writer`. Same as [`write_to`](ReadWrite::write_to).
    pub fn write<T: Write>(&self, writer: &mut T) -> Result<()> {
        self.write_to(writer)
    }

    /// Parses a sequence from the front of `input`.
    pub fn parse(input: &[u8]) -> IResult<&[u8], Self> {
        let (rest, raw) = take::<usize, &[u8], nom::error::Error<&[u8]>>(Self::WIDTH)(input)?;
        let mut bytes = W::Bytes::default();
        bytes.as_mut().copy_from_slice(raw);
        Ok((rest, Self::from_bytes(bytes)))
    }
}

impl<W: Word> ReadWrite for ByteSequence<W> {
    fn read_from<T: Read>(reader: &mut T) -> Result<Self> {
        let mut bytes = W::Bytes::default();
        reader
            .read_exact(bytes.as_mut())
            .map_err(|e| Error::from_read(e, Self::WIDTH))?;
        Ok(Self::from_bytes(bytes))
    }

    fn write_to<T: Write>(&self, writer: &mut T) -> Result<()> {
        writer.write_all(self.bytes().as_ref())?;
        Ok(())
    }
}
