//! # Field-Level Wire Codec
//!
//! Big-endian writer/reader pair over a flat byte buffer. Every field
//! has an explicit width; optionals carry a one-byte presence tag;
//! variable-length blobs carry a u32 length prefix. Decoding is strict:
//! unknown tags and trailing bytes are errors, truncation never panics.

use mat_types::{Address, Coins, PublicKey, Signature};
use thiserror::Error;

/// Codec failure modes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer ended before the field did.
    #[error("Truncated message: needed {needed} more bytes")]
    Truncated { needed: usize },

    /// An op code no handler understands.
    #[error("Unknown op code: {0:#x}")]
    UnknownOp(u32),

    /// A presence/flag byte outside {0, 1}.
    #[error("Invalid tag byte: {0:#x}")]
    InvalidTag(u8),

    /// Bytes left over after the last field.
    #[error("Trailing bytes after message body: {0}")]
    TrailingBytes(usize),
}

/// Append-only big-endian field writer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn write_u32(&mut self, v: u32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn write_u64(&mut self, v: u64) -> &mut Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    /// Coin amounts are a full 128-bit field.
    pub fn write_coins(&mut self, v: Coins) -> &mut Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn write_bool(&mut self, v: bool) -> &mut Self {
        self.buf.push(u8::from(v));
        self
    }

    pub fn write_pubkey(&mut self, key: &PublicKey) -> &mut Self {
        self.buf.extend_from_slice(key);
        self
    }

    pub fn write_signature(&mut self, sig: &Signature) -> &mut Self {
        self.buf.extend_from_slice(sig);
        self
    }

    /// Address with a presence tag; `None` encodes the null address.
    pub fn write_opt_address(&mut self, addr: Option<&Address>) -> &mut Self {
        match addr {
            Some(a) => {
                self.buf.push(1);
                self.buf.extend_from_slice(&a.to_bytes());
            }
            None => self.buf.push(0),
        }
        self
    }

    pub fn write_address(&mut self, addr: &Address) -> &mut Self {
        self.write_opt_address(Some(addr))
    }

    /// Optional length-prefixed blob.
    pub fn write_opt_blob(&mut self, blob: Option<&[u8]>) -> &mut Self {
        match blob {
            Some(b) => {
                self.buf.push(1);
                self.buf.extend_from_slice(&(b.len() as u32).to_be_bytes());
                self.buf.extend_from_slice(b);
            }
            None => self.buf.push(0),
        }
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Strict reader over an encoded body.
#[derive(Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.buf.len() - self.pos;
        if remaining < n {
            return Err(CodecError::Truncated {
                needed: n - remaining,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        let bytes: [u8; 4] = self.take(4)?.try_into().unwrap();
        Ok(u32::from_be_bytes(bytes))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        let bytes: [u8; 8] = self.take(8)?.try_into().unwrap();
        Ok(u64::from_be_bytes(bytes))
    }

    pub fn read_coins(&mut self) -> Result<Coins, CodecError> {
        let bytes: [u8; 16] = self.take(16)?.try_into().unwrap();
        Ok(Coins::from_be_bytes(bytes))
    }

    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            tag => Err(CodecError::InvalidTag(tag)),
        }
    }

    pub fn read_pubkey(&mut self) -> Result<PublicKey, CodecError> {
        Ok(self.take(32)?.try_into().unwrap())
    }

    pub fn read_signature(&mut self) -> Result<Signature, CodecError> {
        Ok(self.take(64)?.try_into().unwrap())
    }

    pub fn read_opt_address(&mut self) -> Result<Option<Address>, CodecError> {
        if !self.read_bool()? {
            return Ok(None);
        }
        let workchain = self.read_u8()? as i8;
        let hash = self.take(32)?.try_into().unwrap();
        Ok(Some(Address::on_workchain(workchain, hash)))
    }

    pub fn read_address(&mut self) -> Result<Address, CodecError> {
        self.read_opt_address()?.ok_or(CodecError::InvalidTag(0))
    }

    pub fn read_opt_blob(&mut self) -> Result<Option<Vec<u8>>, CodecError> {
        if !self.read_bool()? {
            return Ok(None);
        }
        let len = self.read_u32()? as usize;
        Ok(Some(self.take(len)?.to_vec()))
    }

    /// Fail unless the whole buffer was consumed.
    pub fn expect_end(&self) -> Result<(), CodecError> {
        let rest = self.buf.len() - self.pos;
        if rest != 0 {
            return Err(CodecError::TrailingBytes(rest));
        }
        Ok(())
    }
}
