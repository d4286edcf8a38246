//! Capture and replay of raw device traffic.
//!
//! Captures are JSON lines: a header object with the panel geometry, then one
//! `[time, direction, bytes]` array per transport chunk. Replaying a capture
//! through a session reproduces the exact panel and log state the live
//! connection produced, chunk boundaries included.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use lcdsim_core::{Dimensions, Error, Result};

/// Capture file format version written by this crate.
pub const CAPTURE_VERSION: u8 = 1;

/// Direction of a captured chunk, relative to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Bytes received from the device
    Rx,
    /// Bytes sent to the device (acknowledgments)
    Tx,
}

/// Capture file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureHeader {
    /// Format version
    pub version: u8,
    /// Panel rows at capture time
    pub rows: u16,
    /// Panel columns at capture time
    pub cols: u16,
    /// Unix timestamp of capture start
    pub timestamp: Option<i64>,
}

/// A single captured chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureEvent {
    /// Time offset from capture start in seconds
    pub time: f64,
    /// Chunk direction
    pub direction: Direction,
    /// Raw chunk bytes
    pub data: Vec<u8>,
}

/// Records raw transport chunks for later replay.
///
/// # Example
///
/// ```
/// use lcdsim_core::Dimensions;
/// use lcdsim_emulator::TrafficRecorder;
///
/// let mut recorder = TrafficRecorder::new(Dimensions::new(4, 20));
/// recorder.record_rx(&[35, 76, 14, 0, 35]);
/// recorder.record_tx(&[7]);
///
/// let capture = recorder.to_jsonl().unwrap();
/// assert!(capture.contains("\"version\":1"));
/// ```
#[derive(Debug)]
pub struct TrafficRecorder {
    /// Recorded chunks
    events: Vec<CaptureEvent>,
    /// Capture start time
    start_time: Instant,
    /// Panel dimensions
    dimensions: Dimensions,
}

impl TrafficRecorder {
    /// Create a new recorder.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            events: Vec::new(),
            start_time: Instant::now(),
            dimensions,
        }
    }

    /// Record a chunk received from the device.
    pub fn record_rx(&mut self, data: &[u8]) {
        self.push_event(Direction::Rx, data);
    }

    /// Record a chunk sent to the device.
    pub fn record_tx(&mut self, data: &[u8]) {
        self.push_event(Direction::Tx, data);
    }

    fn push_event(&mut self, direction: Direction, data: &[u8]) {
        self.events.push(CaptureEvent {
            time: self.start_time.elapsed().as_secs_f64(),
            direction,
            data: data.to_vec(),
        });
    }

    /// Number of recorded chunks.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Duration of the capture in seconds.
    pub fn duration(&self) -> f64 {
        self.events.last().map(|e| e.time).unwrap_or(0.0)
    }

    /// Panel dimensions the capture was recorded against.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[CaptureEvent] {
        &self.events
    }

    /// Received chunks in arrival order, for replay through a session.
    pub fn rx_chunks(&self) -> impl Iterator<Item = &[u8]> {
        self.events
            .iter()
            .filter(|e| e.direction == Direction::Rx)
            .map(|e| e.data.as_slice())
    }

    fn header(&self) -> CaptureHeader {
        CaptureHeader {
            version: CAPTURE_VERSION,
            rows: self.dimensions.rows,
            cols: self.dimensions.cols,
            timestamp: Some(
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs() as i64)
                    .unwrap_or(0),
            ),
        }
    }

    /// Save the capture to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        self.save_to_writer(&mut file)
    }

    /// Save the capture to a writer.
    pub fn save_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *writer, &self.header())?;
        writeln!(writer)?;

        for event in &self.events {
            let event_array = serde_json::json!([event.time, event.direction, event.data]);
            serde_json::to_writer(&mut *writer, &event_array)?;
            writeln!(writer)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Serialize the capture to a JSON-lines string.
    pub fn to_jsonl(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.save_to_writer(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Capture(e.to_string()))
    }

    /// Load a capture from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        content.parse().map_err(Into::into)
    }
}

impl FromStr for TrafficRecorder {
    type Err = io::Error;

    /// Parse a capture from its JSON-lines form.
    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let mut lines = content.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "empty capture file"))?;
        let header: CaptureHeader = serde_json::from_str(header_line)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if header.version != CAPTURE_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported capture version {}", header.version),
            ));
        }

        let mut events = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let (time, direction, data): (f64, Direction, Vec<u8>) = serde_json::from_str(line)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            events.push(CaptureEvent {
                time,
                direction,
                data,
            });
        }

        Ok(Self {
            events,
            start_time: Instant::now(), // Reset to now
            dimensions: Dimensions::new(header.rows, header.cols),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_creation() {
        let recorder = TrafficRecorder::new(Dimensions::new(4, 20));
        assert_eq!(recorder.event_count(), 0);
        assert_eq!(recorder.duration(), 0.0);
    }

    #[test]
    fn test_record_directions() {
        let mut recorder = TrafficRecorder::new(Dimensions::new(4, 20));
        recorder.record_rx(&[35, 76, 14, 0]);
        recorder.record_tx(&[7]);

        assert_eq!(recorder.event_count(), 2);
        assert_eq!(recorder.events()[0].direction, Direction::Rx);
        assert_eq!(recorder.events()[1].direction, Direction::Tx);
        assert_eq!(recorder.events()[1].data, vec![7]);
    }

    #[test]
    fn test_rx_chunks_skips_acks() {
        let mut recorder = TrafficRecorder::new(Dimensions::new(4, 20));
        recorder.record_rx(&[35, 76]);
        recorder.record_tx(&[7]);
        recorder.record_rx(&[14, 0, 35]);

        let chunks: Vec<&[u8]> = recorder.rx_chunks().collect();
        assert_eq!(chunks, vec![&[35u8, 76][..], &[14u8, 0, 35][..]]);
    }

    #[test]
    fn test_roundtrip_jsonl() {
        let mut recorder = TrafficRecorder::new(Dimensions::new(2, 16));
        recorder.record_rx(&[35, 76, 7, 4, 0, 0, 72, 105]);
        recorder.record_tx(&[7]);
        recorder.record_rx(&[35]);

        let serialized = recorder.to_jsonl().unwrap();
        let loaded = TrafficRecorder::from_str(&serialized).unwrap();

        assert_eq!(loaded.event_count(), 3);
        assert_eq!(loaded.dimensions(), Dimensions::new(2, 16));
        assert_eq!(loaded.events()[0].data, recorder.events()[0].data);
        assert_eq!(loaded.events()[2].data, vec![35]);
    }

    #[test]
    fn test_header_content() {
        let recorder = TrafficRecorder::new(Dimensions::new(4, 20));
        let capture = recorder.to_jsonl().unwrap();
        let header_line = capture.lines().next().unwrap();

        assert!(header_line.contains("\"version\":1"));
        assert!(header_line.contains("\"rows\":4"));
        assert!(header_line.contains("\"cols\":20"));
    }

    #[test]
    fn test_load_empty_capture() {
        assert!(TrafficRecorder::from_str("").is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        assert!(TrafficRecorder::from_str("not json").is_err());
    }

    #[test]
    fn test_load_unsupported_version() {
        let content = "{\"version\":9,\"rows\":4,\"cols\":20,\"timestamp\":null}\n";
        assert!(TrafficRecorder::from_str(content).is_err());
    }
}
