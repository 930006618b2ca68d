// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where the decoder pulls bytes from.
//!
//! A [`ByteSource`] hands out one byte at a time and distinguishes "nothing right now"
//! ([`ReadByte::WouldBlock`]) from "nothing ever again" ([`ReadByte::Eof`]). End of
//! stream is sticky until [`ByteSource::reset_eof`] is called, which lets a session
//! resume after the transport reconnects or the producer pushes more data.

use std::{collections::VecDeque,
          io::{ErrorKind, Read}};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadByte {
    Byte(u8),
    WouldBlock,
    Eof,
}

pub trait ByteSource {
    fn read_byte(&mut self) -> ReadByte;

    /// Forget a previously reported end of stream.
    fn reset_eof(&mut self) {}
}

/// In-memory source fed in chunks of any size. Reports [`ReadByte::WouldBlock`] when
/// drained and [`ReadByte::Eof`] once drained after [`ChunkedByteSource::close`].
#[derive(Debug, Default)]
pub struct ChunkedByteSource {
    buffer: VecDeque<u8>,
    closed: bool,
}

impl ChunkedByteSource {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, chunk: impl AsRef<[u8]>) {
        self.buffer.extend(chunk.as_ref());
    }

    pub fn close(&mut self) { self.closed = true; }

    #[must_use]
    pub fn is_closed(&self) -> bool { self.closed }

    #[must_use]
    pub fn pending(&self) -> usize { self.buffer.len() }
}

impl From<&[u8]> for ChunkedByteSource {
    /// A closed source holding `bytes`.
    fn from(bytes: &[u8]) -> Self {
        Self {
            buffer: bytes.iter().copied().collect(),
            closed: true,
        }
    }
}

impl ByteSource for ChunkedByteSource {
    fn read_byte(&mut self) -> ReadByte {
        match self.buffer.pop_front() {
            Some(byte) => ReadByte::Byte(byte),
            None if self.closed => ReadByte::Eof,
            None => ReadByte::WouldBlock,
        }
    }

    fn reset_eof(&mut self) { self.closed = false; }
}

const READ_BUFFER_SIZE: usize = 4096;

/// Buffered adapter over any [`Read`], such as a PTY master or a socket.
///
/// A read of zero bytes is end of stream. [`ErrorKind::WouldBlock`] maps to
/// [`ReadByte::WouldBlock`] for non-blocking readers, [`ErrorKind::Interrupted`] is
/// retried, and any other error is logged and treated as end of stream.
#[derive(Debug)]
pub struct ReaderByteSource<R: Read> {
    reader: R,
    buffer: Box<[u8]>,
    start: usize,
    end: usize,
    eof: bool,
}

impl<R: Read> ReaderByteSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: vec![0; READ_BUFFER_SIZE].into_boxed_slice(),
            start: 0,
            end: 0,
            eof: false,
        }
    }

    pub fn into_inner(self) -> R { self.reader }

    fn fill(&mut self) -> Option<ReadByte> {
        loop {
            match self.reader.read(&mut self.buffer) {
                Ok(0) => {
                    self.eof = true;
                    return Some(ReadByte::Eof);
                }
                Ok(count) => {
                    self.start = 0;
                    self.end = count;
                    return None;
                }
                Err(error) if error.kind() == ErrorKind::Interrupted => {}
                Err(error) if error.kind() == ErrorKind::WouldBlock => {
                    return Some(ReadByte::WouldBlock);
                }
                Err(error) => {
                    tracing::error!(%error, "byte source read failed, treating as end of stream");
                    self.eof = true;
                    return Some(ReadByte::Eof);
                }
            }
        }
    }
}

impl<R: Read> ByteSource for ReaderByteSource<R> {
    fn read_byte(&mut self) -> ReadByte {
        if self.start == self.end {
            if self.eof {
                return ReadByte::Eof;
            }
            if let Some(outcome) = self.fill() {
                return outcome;
            }
        }
        let byte = self.buffer[self.start];
        self.start += 1;
        ReadByte::Byte(byte)
    }

    fn reset_eof(&mut self) { self.eof = false; }
}
