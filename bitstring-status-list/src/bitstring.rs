use crate::{Error, Result};
use base64::Engine;

/// A fixed-length vector of bits, stored in ceil(bit_length/8) bytes.  Bit `p` lives in byte `p/8`
/// at offset `p%8`, least-significant bit first.  This ordering is what other status list producers
/// and consumers expect, so it must not change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bitstring {
    byte_v: Vec<u8>,
    bit_length: usize,
}

impl Bitstring {
    /// Construct from either an existing buffer or a bit length.  The buffer takes precedence if both
    /// are given.  A bit length of zero counts as not given.
    pub fn new(buffer_o: Option<Vec<u8>>, bit_length_o: Option<usize>) -> Result<Self> {
        match (buffer_o, bit_length_o) {
            (Some(byte_v), _) => Ok(Self::from_bytes(byte_v)),
            (None, Some(bit_length)) => Self::with_bit_length(bit_length),
            (None, None) => Err(Error::MissingBufferOrLength),
        }
    }
    /// All bits of the buffer are addressable.
    pub fn from_bytes(byte_v: Vec<u8>) -> Self {
        let bit_length = byte_v.len() * 8;
        Self { byte_v, bit_length }
    }
    /// Zero-initialized bitstring of the given length.
    pub fn with_bit_length(bit_length: usize) -> Result<Self> {
        if bit_length == 0 {
            return Err(Error::MissingBufferOrLength);
        }
        Ok(Self {
            byte_v: vec![0u8; bit_length.div_ceil(8)],
            bit_length,
        })
    }
    /// Decode a base64-encoded list into a bitstring.
    pub fn from_encoded_list(encoded: &str) -> Result<Self> {
        Ok(Self::from_bytes(Self::decode_bits(encoded)?))
    }
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }
    pub fn as_bytes(&self) -> &[u8] {
        self.byte_v.as_slice()
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.byte_v
    }
    pub fn set(&mut self, position: usize, value: bool) -> Result<()> {
        let (byte_index, mask) = self.locate(position)?;
        if value {
            self.byte_v[byte_index] |= mask;
        } else {
            self.byte_v[byte_index] &= !mask;
        }
        Ok(())
    }
    pub fn get(&self, position: usize) -> Result<bool> {
        let (byte_index, mask) = self.locate(position)?;
        Ok(self.byte_v[byte_index] & mask != 0)
    }
    /// Standard, padded base64 (RFC 4648).  No compression is applied.
    pub fn encode_bits(&self) -> String {
        Self::encode(self.byte_v.as_slice())
    }
    pub fn encode(byte_v: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(byte_v)
    }
    pub fn decode_bits(encoded: &str) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| Error::MalformedEncodedList(e.to_string().into()))
    }
    fn locate(&self, position: usize) -> Result<(usize, u8)> {
        if position >= self.bit_length {
            return Err(Error::PositionOutOfRange {
                position,
                bit_length: self.bit_length,
            });
        }
        Ok((position / 8, 1u8 << (position % 8)))
    }
}
