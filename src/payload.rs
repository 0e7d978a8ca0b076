//! Byte payload normalization
//!
//! Every write path accepts one of three input representations of a byte
//! payload: a borrowed slice, an owned vector, or a streaming reader. All of
//! them normalize into [`Payload`] before any file operation runs.

use std::io::Read;

use crate::error::StoreError;

/// Opaque immutable byte sequence handed to store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Drains a reader into a payload.
    ///
    /// Fails with `ReadFailed` if the stream yields no bytes at all or the
    /// underlying read errors.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, StoreError> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        if buf.is_empty() {
            return Err(StoreError::ReadFailed("empty source buffer".into()));
        }

        Ok(Payload(buf))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_and_slice_normalize_to_same_payload() {
        let bytes = b"Hello, World!".to_vec();
        let from_reader = Payload::from_reader(Cursor::new(bytes.clone())).unwrap();
        let from_slice = Payload::from(bytes.as_slice());
        let from_vec = Payload::from(bytes);
        assert_eq!(from_reader, from_slice);
        assert_eq!(from_slice, from_vec);
    }

    #[test]
    fn empty_reader_is_read_failed() {
        let err = Payload::from_reader(Cursor::new(Vec::new())).unwrap_err();
        assert!(matches!(err, StoreError::ReadFailed(_)));
    }
}
