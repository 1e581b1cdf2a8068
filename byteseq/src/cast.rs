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
//! Byte casting of scalar values to and from an underlying storage type.
//!
//! A byte cast keeps the bit pattern of a value and never performs a numeric conversion:
//! casting `1.5f32` to `u32` gives `0x3FC0_0000`, not `1`.
//!
//! A value may be cast into a wider storage type. Its bytes then occupy the lowest addresses of
//! the storage and the remaining bytes are zero. Casting a wider value into a narrower type is
//! rejected when the program is built:
//!
//! ```compile_fail
//! let _: u32 = byteseq::cast::underlying_cast(1u64);
//! ```

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::byteswapper::ByteSwap;
use crate::private::Sealed;

/// A fixed-width value without padding or pointers whose raw bytes can be reinterpreted.
///
/// This trait is implemented for all 16, 32 and 64 bit integers and floats.
/// Newtypes around those can derive it with `#[derive(Scalar)]`.
pub trait Scalar: Copy {
    /// Native-order bytes of the value.
    type Bytes: ByteSwap;
    /// The storage type of the same width.
    type Word: Word<Bytes = Self::Bytes>;

    /// Width of the value in bytes.
    const WIDTH: usize = <Self::Bytes as ByteSwap>::LEN;

    fn to_ne_bytes(self) -> Self::Bytes;
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

/// Unsigned storage type backing a byte sequence: `u16`, `u32` or `u64`.
pub trait Word: Scalar<Word = Self> + Sealed + Default + Eq + Hash + Debug {
    /// Returns the word with all of its bytes reversed.
    #[inline]
    fn swapped(self) -> Self {
        let mut bytes = self.to_ne_bytes();
        bytes.swap_bytes();
        Self::from_ne_bytes(bytes)
    }
}

macro_rules! impl_scalar_nums {
    ($($t:ty, $s:literal => $w:ty)*) => {
        $(
            impl Scalar for $t {
                type Bytes = [u8; $s];
                type Word = $w;

                #[inline]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$t>::to_ne_bytes(self)
                }
                #[inline]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$t>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}
impl_scalar_nums! { u16, 2 => u16  i16, 2 => u16  u32, 4 => u32  i32, 4 => u32  f32, 4 => u32  u64, 8 => u64  i64, 8 => u64  f64, 8 => u64 }

impl Sealed for u16 {}
impl Sealed for u32 {}
impl Sealed for u64 {}
impl Word for u16 {}
impl Word for u32 {}
impl Word for u64 {}

/// Build-time check that `V` fits into `U`.
pub(crate) struct Fits<V, U>(PhantomData<(V, U)>);

impl<V: Scalar, U: Scalar> Fits<V, U> {
    pub(crate) const OK: () = assert!(V::WIDTH <= U::WIDTH, "value type is wider than its underlying type");
}

/// Casts a value to an underlying type of the same or greater width.
#[inline]
pub fn underlying_cast<V: Scalar, U: Scalar>(v: V) -> U {
    let () = Fits::<V, U>::OK;
    let mut raw = U::Bytes::default();
    raw.as_mut()[..V::WIDTH].copy_from_slice(v.to_ne_bytes().as_ref());
    U::from_ne_bytes(raw)
}

/// Casts an underlying value back to a value type of the same or smaller width.
///
/// Only the lowest-addressed `V::WIDTH` bytes of `u` take part.
#[inline]
pub fn value_cast<V: Scalar, U: Scalar>(u: U) -> V {
    let () = Fits::<V, U>::OK;
    let mut raw = V::Bytes::default();
    raw.as_mut().copy_from_slice(&u.to_ne_bytes().as_ref()[..V::WIDTH]);
    V::from_ne_bytes(raw)
}
