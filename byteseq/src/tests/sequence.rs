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
use std::io::{Cursor, ErrorKind};

use crate::prelude::*;

#[test]
fn default_is_zeroed() {
    assert_eq!(ByteSequence8::default().bytes(), [0; 8]);
    assert_eq!(ByteSequence2::zeroed().word(), 0);
    assert_eq!(ByteSequence4::WIDTH, 4);
}

#[test]
fn swap_examples() {
    assert_eq!(ByteSequence2::new_swapped(0x00FFu16).value::<u16>(), 0xFF00);
    assert_eq!(ByteSequence4::new_swapped(0xAABBCCDDu32).word(), 0xDDCCBBAA);
    assert_eq!(ByteSequence4::with_swap(0xAABBCCDDu32, true).word(), 0xDDCCBBAA);
    assert_eq!(ByteSequence4::with_swap(0xAABBCCDDu32, false).word(), 0xAABBCCDD);
}

#[test]
fn swap_reverses_memory_order() {
    let seq = ByteSequence8::new(0x0102030405060708u64);
    let mut reversed = seq.bytes();
    reversed.reverse();
    assert_eq!(seq.swapped().bytes(), reversed);
    assert_eq!(seq.swapped().swapped(), seq);
}

#[test]
fn retrieval_does_not_consume() {
    let seq = ByteSequence4::new(-2i32);
    assert_eq!(seq.value::<i32>(), -2);
    assert_eq!(seq.value::<u32>(), 0xFFFF_FFFE);
    assert_eq!(seq.value_swapped::<u32>(), 0xFEFF_FFFF);
    assert_eq!(seq.value_with::<i32>(false), -2);
    assert_eq!(seq.value_with::<u32>(true), 0xFEFF_FFFF);
    assert_eq!(seq.value::<i32>(), -2);
}

#[test]
fn narrow_value_in_wide_sequence() {
    let seq = ByteSequence4::new(0x1234u16);
    assert_eq!(seq.value::<u16>(), 0x1234);
    assert_eq!(&seq.bytes()[..2], &0x1234u16.to_ne_bytes());
    assert_eq!(&seq.bytes()[2..], &[0, 0]);

    let seq = ByteSequence4::new_swapped(0x1234u16);
    assert_eq!(&seq.bytes()[..2], &[0, 0]);
    assert_eq!(seq.value_swapped::<u16>(), 0x1234);
}

#[test]
fn write_emits_stored_bytes() -> crate::Result<()> {
    let seq = ByteSequence4::from_bytes([1, 2, 3, 4]);
    let mut out = Vec::new();
    seq.write_to(&mut out)?;
    seq.swapped().write(&mut out)?;
    assert_eq!(out, [1, 2, 3, 4, 4, 3, 2, 1]);
    Ok(())
}

#[test]
fn read_does_not_swap() -> crate::Result<()> {
    let mut cursor = Cursor::new([0xABu8, 0xCD, 1, 2, 3, 4, 5, 6, 7, 8]);
    let short = ByteSequence2::read_from(&mut cursor)?;
    assert_eq!(short.bytes(), [0xAB, 0xCD]);

    let mut long = ByteSequence8::default();
    long.read(&mut cursor)?;
    assert_eq!(long.bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
    Ok(())
}

#[test]
fn short_read_is_an_error() {
    let mut seq = ByteSequence4::new(7u32);
    let mut cursor = Cursor::new([1u8, 2]);
    match seq.read(&mut cursor) {
        Err(Error::Truncated { width }) => assert_eq!(width, 4),
        other => panic!("expected a truncated read, got {:?}", other),
    }
    assert_eq!(seq.value::<u32>(), 7);

    let mut empty: &[u8] = &[];
    match ByteSequence2::read_from(&mut empty) {
        Err(Error::Truncated { width: 2 }) => {}
        other => panic!("expected a truncated read, got {:?}", other),
    }
}

#[test]
fn short_write_is_an_error() {
    let mut buf = [0u8; 6];
    let mut sink: &mut [u8] = &mut buf;
    match ByteSequence8::new(1u64).write_to(&mut sink) {
        Err(Error::IO(e)) => assert_eq!(e.kind(), ErrorKind::WriteZero),
        other => panic!("expected a short write, got {:?}", other),
    }
}

#[test]
fn parse_from_slice() {
    let input = [0xABu8, 0xCD, 0xEF];
    let (rest, seq) = ByteSequence2::parse(&input).unwrap();
    assert_eq!(rest, &[0xEF]);
    assert_eq!(seq.bytes(), [0xAB, 0xCD]);

    assert!(ByteSequence4::parse(&input).is_err());
}
