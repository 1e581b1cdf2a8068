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
//! Useful re-exports that can be reused.

pub use std::io::{Read, Write};
pub use crate::{ReadWrite, Result, Error};
pub use crate::cast::{Scalar, Word, underlying_cast, value_cast};
pub use crate::sequence::*;
pub use crate::dispatch::*;
pub use crate::endian::*;
pub use crate::converter::*;
#[cfg(feature = "derive")]
pub use byteseq_macros::*;
