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
//! Compile-time selection between swapping and non-swapping conversions.
//!
//! [`StaticConverter`](crate::StaticConverter) knows at build time whether it has to swap, and
//! picks one of these swappers so that no branch is left at runtime.

use crate::cast::Scalar;
use crate::sequence::ByteSequence;

/// Converts between values and byte sequences of their own width.
pub trait SwapDispatch {
    /// Whether the conversions swap bytes.
    const SWAP: bool;

    fn make_byte_sequence<T: Scalar>(x: T) -> ByteSequence<T::Word>;
    fn make_value<T: Scalar>(seq: ByteSequence<T::Word>) -> T;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Swapper<const SWAP: bool>;

/// Leaves bytes as they are.
pub type NoSwap = Swapper<false>;
/// Reverses bytes.
pub type Swap = Swapper<true>;

impl SwapDispatch for Swapper<false> {
    const SWAP: bool = false;

    #[inline]
    fn make_byte_sequence<T: Scalar>(x: T) -> ByteSequence<T::Word> {
        ByteSequence::new(x)
    }
    #[inline]
    fn make_value<T: Scalar>(seq: ByteSequence<T::Word>) -> T {
        seq.value()
    }
}

impl SwapDispatch for Swapper<true> {
    const SWAP: bool = true;

    #[inline]
    fn make_byte_sequence<T: Scalar>(x: T) -> ByteSequence<T::Word> {
        ByteSequence::new_swapped(x)
    }
    #[inline]
    fn make_value<T: Scalar>(seq: ByteSequence<T::Word>) -> T {
        seq.value_swapped()
    }
}
