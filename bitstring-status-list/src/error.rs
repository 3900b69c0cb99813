use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Either a buffer or a nonzero bit length must be provided")]
    MissingBufferOrLength,
    #[error("Bit position {position} is out of range for a bitstring of {bit_length} bits")]
    PositionOutOfRange { position: usize, bit_length: usize },
    #[error("Encoded list is not valid base64: {0}")]
    MalformedEncodedList(Cow<'static, str>),
    #[error("Malformed status list claims: {0}")]
    MalformedClaims(Cow<'static, str>),
    #[error("No status list entry found for purpose {0:?}")]
    PurposeNotFound(String),
}
