//! Stateful framing of the raw device byte stream.

use crate::wire;

/// A single protocol frame: the bytes accumulated between start markers.
///
/// Frames exist only long enough to be interpreted and are discarded
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
}

impl Frame {
    /// Wrap raw frame bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Command group (byte 0).
    pub fn group(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// Subopcode within the group (byte 1).
    pub fn subopcode(&self) -> Option<u8> {
        self.bytes.get(1).copied()
    }

    /// Declared payload length (byte 2); 0 when absent.
    pub fn length_byte(&self) -> u8 {
        self.bytes.get(2).copied().unwrap_or(0)
    }

    /// Payload bytes following the length byte.
    pub fn payload(&self) -> &[u8] {
        self.tail(3)
    }

    /// Byte at an absolute frame offset.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// All bytes from an absolute offset to the end of the frame.
    ///
    /// Empty when the offset lies past the end.
    pub fn tail(&self, start: usize) -> &[u8] {
        self.bytes.get(start..).unwrap_or(&[])
    }

    /// Raw frame bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Frame length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a frame with no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Splits an arbitrarily chunked byte stream into protocol frames.
///
/// The marker byte begins a frame. A non-zero byte at offset 2 declares the
/// payload length and closes the frame once `length + 3` bytes have
/// accumulated; a zero length byte leaves the frame open until the next
/// marker, which finalizes the pending bytes before starting over. A marker
/// arriving mid-frame therefore doubles as the protocol's resynchronization
/// point: the partial frame is handed out as-is and interpretation decides
/// whether it was complete.
///
/// State survives across calls, so chunk boundaries may fall anywhere.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    /// True between a marker and the end of its frame
    collecting: bool,
    /// Bytes of the frame currently being accumulated
    buffer: Vec<u8>,
}

impl FrameDecoder {
    /// Create a new frame decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of raw bytes.
    ///
    /// Returns every frame completed within this chunk, in arrival order.
    /// Empty chunks are a no-op.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Frame> {
        let mut frames = Vec::new();

        for &byte in chunk {
            if byte == wire::MARKER {
                if !self.buffer.is_empty() {
                    frames.push(Frame::new(std::mem::take(&mut self.buffer)));
                }
                self.collecting = true;
                continue;
            }

            if !self.collecting {
                // Noise before the first marker of the stream
                continue;
            }

            let declared = self.buffer.get(2).copied().unwrap_or(0) as usize;
            if declared != 0 && self.buffer.len() == declared + 2 {
                // Length rule: one byte beyond length+2 completes the frame
                self.buffer.push(byte);
                frames.push(Frame::new(std::mem::take(&mut self.buffer)));
                self.collecting = false;
                continue;
            }

            self.buffer.push(byte);
        }

        frames
    }

    /// Discard any partially accumulated frame.
    pub fn reset(&mut self) {
        self.collecting = false;
        self.buffer.clear();
    }

    /// Number of bytes accumulated for the open frame.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// True while a frame is open.
    pub fn is_collecting(&self) -> bool {
        self.collecting
    }
}
