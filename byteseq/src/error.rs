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
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] io::Error),
    /// The source ran out of data before a whole sequence was read.
    #[error("Unexpected end of data: expected {width} bytes")]
    Truncated { width: usize },
    #[error("Unsupported byte order: {0}")]
    UnsupportedOrder(String),
}

impl Error {
    /// Classifies a failed `read_exact` of a `width`-byte sequence.
    pub(crate) fn from_read(e: io::Error, width: usize) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => Error::Truncated { width },
            _ => Error::IO(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
