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
//! Conversion of host values to and from a target byte order.
//!
//! ```
//! use byteseq::{Big, EndianConverter, StaticConverter};
//!
//! let ec = StaticConverter::<Big>::new();
//! assert_eq!(ec.from_host(1i32).bytes(), [0, 0, 0, 1]);
//! assert_eq!(ec.to_host::<i32>(ec.from_host(1i32)), 1);
//! ```

use std::fmt;
use std::io::{Read, Write};
use std::marker::PhantomData;

use crate::cast::Scalar;
use crate::dispatch::SwapDispatch;
use crate::endian::{ByteOrder, Endian};
use crate::sequence::ByteSequence;
use crate::{ReadWrite, Result};

/// Converts values between the host byte order and a target byte order.
pub trait EndianConverter {
    /// The byte order values are converted to.
    fn target(&self) -> Endian;
    /// The byte order of the host.
    fn host(&self) -> Endian;

    #[inline]
    fn needs_swap(&self) -> bool {
        self.host() != self.target()
    }
    #[inline]
    fn host_is_little(&self) -> bool {
        self.host().is_little()
    }
    #[inline]
    fn host_is_big(&self) -> bool {
        self.host().is_big()
    }

    /// Converts a host value to a sequence of its bytes in the target order.
    fn from_host<T: Scalar>(&self, x: T) -> ByteSequence<T::Word>;
    /// Converts a sequence of bytes in the target order to a host value.
    fn to_host<T: Scalar>(&self, seq: ByteSequence<T::Word>) -> T;

    /// Writes `x` to `writer` in the target order.
    fn write_value<T: Scalar, W: Write>(&self, x: T, writer: &mut W) -> Result<()> {
        self.from_host(x).write_to(writer)
    }

    /// Reads a `T` stored in the target order from `reader`.
    fn read_value<T: Scalar, R: Read>(&self, reader: &mut R) -> Result<T> {
        let seq = ByteSequence::<T::Word>::read_from(reader)?;
        Ok(self.to_host(seq))
    }
}

/// Converter whose host byte order is fixed when the crate is built.
///
/// Whether to swap is a constant, so conversions compile down to either a plain copy or
/// a byte swap.
#[derive(Clone, Copy, Default)]
pub struct StaticConverter<E: ByteOrder>(PhantomData<E>);

/// Converter to little endian.
pub type LittleEndianConverter = StaticConverter<crate::endian::Little>;
/// Converter to big endian.
pub type BigEndianConverter = StaticConverter<crate::endian::Big>;

impl<E: ByteOrder> StaticConverter<E> {
    pub const HOST: Endian = Endian::NATIVE;
    pub const TARGET: Endian = E::ENDIAN;
    pub const NEEDS_SWAP: bool = <E::HostSwapper as SwapDispatch>::SWAP;

    #[inline]
    pub const fn new() -> Self {
        StaticConverter(PhantomData)
    }
}

impl<E: ByteOrder> fmt::Debug for StaticConverter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticConverter")
            .field("host", &Self::HOST)
            .field("target", &Self::TARGET)
            .finish()
    }
}

impl<E: ByteOrder> EndianConverter for StaticConverter<E> {
    #[inline]
    fn target(&self) -> Endian {
        Self::TARGET
    }
    #[inline]
    fn host(&self) -> Endian {
        Self::HOST
    }
    #[inline]
    fn needs_swap(&self) -> bool {
        Self::NEEDS_SWAP
    }

    #[inline]
    fn from_host<T: Scalar>(&self, x: T) -> ByteSequence<T::Word> {
        <E::HostSwapper as SwapDispatch>::make_byte_sequence(x)
    }
    #[inline]
    fn to_host<T: Scalar>(&self, seq: ByteSequence<T::Word>) -> T {
        <E::HostSwapper as SwapDispatch>::make_value(seq)
    }
}

/// Converter that detects the host byte order at runtime.
///
/// The host is probed once per process (see [`Endian::host`]) and whether to swap is decided
/// when the converter is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynamicConverter {
    target: Endian,
    host: Endian,
    swap: bool,
}

impl DynamicConverter {
    pub fn new(target: Endian) -> Self {
        Self::with_host(target, Endian::host())
    }

    /// Creates a converter for an explicitly given host order.
    pub fn with_host(target: Endian, host: Endian) -> Self {
        Self {
            target,
            host,
            swap: target != host,
        }
    }
}

impl<E: ByteOrder> From<StaticConverter<E>> for DynamicConverter {
    fn from(_: StaticConverter<E>) -> Self {
        Self::new(E::ENDIAN)
    }
}

impl EndianConverter for DynamicConverter {
    #[inline]
    fn target(&self) -> Endian {
        self.target
    }
    #[inline]
    fn host(&self) -> Endian {
        self.host
    }
    #[inline]
    fn needs_swap(&self) -> bool {
        self.swap
    }

    #[inline]
    fn from_host<T: Scalar>(&self, x: T) -> ByteSequence<T::Word> {
        ByteSequence::with_swap(x, self.swap)
    }
    #[inline]
    fn to_host<T: Scalar>(&self, seq: ByteSequence<T::Word>) -> T {
        seq.value_with(self.swap)
    }
}
