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
//! Fixed-width byte sequences with explicit control over byte order.
//!
//! A value is turned into a [`ByteSequence`] of its own width by an [`EndianConverter`]
//! bound to the byte order of a file or wire format, written out, and later read back
//! and converted to the host order again:
//!
//! ```
//! use byteseq::{Endian, EndianConverter, DynamicConverter};
//! use std::io::Cursor;
//!
//! let ec = DynamicConverter::new(Endian::Big);
//! let mut buf = Cursor::new(Vec::new());
//! ec.write_value(1i32, &mut buf)?;
//! ec.write_value(1.5f32, &mut buf)?;
//! assert_eq!(&buf.get_ref()[..4], &[0, 0, 0, 1]);
//!
//! buf.set_position(0);
//! assert_eq!(ec.read_value::<i32, _>(&mut buf)?, 1);
//! assert_eq!(ec.read_value::<f32, _>(&mut buf)?, 1.5);
//! # Ok::<(), byteseq::Error>(())
//! ```
//!
//! The sequences carry no byte order tag: the reading side must use a converter bound to
//! the same order as the writing side.

extern crate self as byteseq;

pub mod cast;
pub mod converter;
pub mod dispatch;
pub mod endian;
pub mod error;
pub mod prelude;
pub mod sequence;

mod byteswapper;

#[cfg(test)]
mod tests;

use std::io::{Read, Write};

pub use crate::cast::{Scalar, Word};
pub use crate::converter::{BigEndianConverter, DynamicConverter, EndianConverter, LittleEndianConverter, StaticConverter};
pub use crate::endian::{Big, ByteOrder, Endian, Little};
pub use crate::error::{Error, Result};
pub use crate::sequence::{ByteSequence, ByteSequence2, ByteSequence4, ByteSequence8};

/// Derives [`Scalar`] for a newtype around a scalar.
///
/// ```
/// use byteseq::{Little, EndianConverter, Scalar, StaticConverter};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Scalar)]
/// struct Meters(f32);
///
/// let ec = StaticConverter::<Little>::new();
/// assert_eq!(ec.to_host::<Meters>(ec.from_host(Meters(2.5))), Meters(2.5));
/// ```
#[cfg(feature = "derive")]
pub use byteseq_macros::Scalar;

/// The generic read and write trait. This indicates a structure can be read without additional contextual information.
pub trait ReadWrite where Self: Sized {
    fn read_from<T: Read>(reader: &mut T) -> Result<Self>;
    fn write_to<T: Write>(&self, writer: &mut T) -> Result<()>;
}

mod private {
    pub trait Sealed {}
}
