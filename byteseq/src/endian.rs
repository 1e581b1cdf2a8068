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
//! Byte orders and host byte order detection.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::dispatch::{SwapDispatch, Swapper};
use crate::error::Error;
use crate::private::Sealed;
use crate::sequence::ByteSequence2;

#[cfg(not(any(target_endian = "little", target_endian = "big")))]
compile_error!("byteseq only supports little endian and big endian targets");

/// A byte order. Mixed orders such as PDP are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

lazy_static! {
    static ref HOST: Endian = Endian::detect();
}

impl Endian {
    /// Byte order of the compilation target.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;
    /// Byte order of the compilation target.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// Probes the byte order of the running host.
    ///
    /// `0x00FF` is stored in a 2 byte word; the host is little endian if the lowest-addressed
    /// byte is the `0xFF` one. The probe is repeated on every call, see [`Endian::host`] for
    /// the cached result.
    pub fn detect() -> Endian {
        if ByteSequence2::new(0x00FFu16).bytes()[0] == 0xFF {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    /// Byte order of the running host, detected once per process.
    #[inline]
    pub fn host() -> Endian {
        *HOST
    }

    #[inline]
    pub const fn opposite(self) -> Endian {
        match self {
            Endian::Little => Endian::Big,
            Endian::Big => Endian::Little,
        }
    }

    #[inline]
    pub const fn is_little(self) -> bool {
        matches!(self, Endian::Little)
    }

    #[inline]
    pub const fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endian::Little => "little",
            Endian::Big => "big",
        })
    }
}

impl FromStr for Endian {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(Endian::Little),
            "big" | "be" => Ok(Endian::Big),
            _ => Err(Error::UnsupportedOrder(s.to_owned())),
        }
    }
}

/// A byte order known at the type level.
pub trait ByteOrder: Sealed + Copy + Default + fmt::Debug {
    const ENDIAN: Endian;
    /// Swapper converting between the host order and this order.
    type HostSwapper: SwapDispatch;
}

/// Type-level [`Endian::Little`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Little;

/// Type-level [`Endian::Big`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Big;

impl Sealed for Little {}
impl Sealed for Big {}

impl ByteOrder for Little {
    const ENDIAN: Endian = Endian::Little;
    #[cfg(target_endian = "little")]
    type HostSwapper = Swapper<false>;
    #[cfg(target_endian = "big")]
    type HostSwapper = Swapper<true>;
}

impl ByteOrder for Big {
    const ENDIAN: Endian = Endian::Big;
    #[cfg(target_endian = "little")]
    type HostSwapper = Swapper<true>;
    #[cfg(target_endian = "big")]
    type HostSwapper = Swapper<false>;
}
