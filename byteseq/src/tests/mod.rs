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
mod sequence;

use lazy_static::lazy_static;

/// Host value and the bytes it must become in little and big endian.
pub(crate) struct Sample {
    pub value: u32,
    pub little: [u8; 4],
    pub big: [u8; 4],
}

lazy_static! {
    pub(crate) static ref SAMPLES: Vec<Sample> = vec![
        Sample { value: 0, little: [0, 0, 0, 0], big: [0, 0, 0, 0] },
        Sample { value: 1, little: [1, 0, 0, 0], big: [0, 0, 0, 1] },
        Sample { value: 0xAABBCCDD, little: [0xDD, 0xCC, 0xBB, 0xAA], big: [0xAA, 0xBB, 0xCC, 0xDD] },
        Sample { value: u32::MAX, little: [0xFF; 4], big: [0xFF; 4] },
    ];
}
