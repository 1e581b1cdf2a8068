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
use crate::private::Sealed;

/// Raw native-order bytes of a scalar.
///
/// Only 2, 4 and 8 byte arrays implement this trait, which is what closes the set of
/// supported widths.
pub trait ByteSwap: Sealed + Copy + Default + AsRef<[u8]> + AsMut<[u8]> {
    /// Number of bytes in the array.
    const LEN: usize;

    /// Reverses the order of all bytes in place.
    fn swap_bytes(&mut self);
}

impl Sealed for [u8; 2] {}
impl Sealed for [u8; 4] {}
impl Sealed for [u8; 8] {}

impl ByteSwap for [u8; 2] {
    const LEN: usize = 2;
    fn swap_bytes(&mut self) {
        self.swap(0, 1);
    }
}
impl ByteSwap for [u8; 4] {
    const LEN: usize = 4;
    fn swap_bytes(&mut self) {
        self.swap(0, 3);
        self.swap(1, 2);
    }
}
impl ByteSwap for [u8; 8] {
    const LEN: usize = 8;
    fn swap_bytes(&mut self) {
        self.swap(0, 7);
        self.swap(1, 6);
        self.swap(2, 5);
        self.swap(3, 4);
    }
}
