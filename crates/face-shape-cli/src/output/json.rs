//! JSON output adapter.

use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::Result;
use face_shape_core::{ResultOutput, ShapeReport};

/// Output mode: one JSON object per line, or a single array on flush.
enum Mode {
    Lines,
    Array { pretty: bool, buffered: Vec<ShapeReport> },
}

/// JSON output adapter writing to stdout.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    mode: Mutex<Mode>,
}

impl JsonOutput {
    /// Creates a JSON Lines output writing to stdout.
    #[must_use]
    pub fn lines() -> Self {
        Self::with_writer(Box::new(io::stdout()), Mode::Lines)
    }

    /// Creates an array output writing to stdout; reports are buffered
    /// and emitted as one JSON array on flush.
    #[must_use]
    pub fn array(pretty: bool) -> Self {
        Self::with_writer(
            Box::new(io::stdout()),
            Mode::Array {
                pretty,
                buffered: Vec::new(),
            },
        )
    }

    /// Creates a JSON Lines output writing to the given writer.
    #[cfg(test)]
    fn lines_to(writer: Box<dyn Write + Send>) -> Self {
        Self::with_writer(writer, Mode::Lines)
    }

    #[cfg(test)]
    fn array_to(writer: Box<dyn Write + Send>, pretty: bool) -> Self {
        Self::with_writer(
            writer,
            Mode::Array {
                pretty,
                buffered: Vec::new(),
            },
        )
    }

    fn with_writer(writer: Box<dyn Write + Send>, mode: Mode) -> Self {
        Self {
            writer: Mutex::new(writer),
            mode: Mutex::new(mode),
        }
    }
}

impl ResultOutput for JsonOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, report: &ShapeReport) -> Result<()> {
        let mut mode = self
            .mode
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;

        match &mut *mode {
            Mode::Lines => {
                let json = serde_json::to_string(report)?;
                let mut writer = self
                    .writer
                    .lock()
                    .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
                writeln!(writer, "{json}")?;
            }
            Mode::Array { buffered, .. } => {
                buffered.push(report.clone());
            }
        }

        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let mut mode = self
            .mode
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;

        if let Mode::Array { pretty, buffered } = &*mode {
            let json = if *pretty {
                serde_json::to_string_pretty(buffered)?
            } else {
                serde_json::to_string(buffered)?
            };
            writeln!(writer, "{json}")?;
        }

        if let Mode::Array { buffered, .. } = &mut *mode {
            buffered.clear();
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use face_shape_core::{FaceShape, ImageDimensions, ShapeMeasurements};

    use super::*;

    /// Writer capturing output in a shared buffer.
    #[derive(Clone)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn report(path: &str) -> ShapeReport {
        ShapeReport {
            path: path.into(),
            timestamp: "2025-01-01T00:00:00Z".into(),
            dimensions: ImageDimensions::new(640, 480),
            shape: FaceShape::Oval,
            measurements: ShapeMeasurements {
                height_width_ratio: 1.33,
                jaw_width_ratio: 0.92,
            },
            styles: vec!["Layered cut".into()],
        }
    }

    #[test]
    fn test_lines_mode_writes_one_object_per_line() {
        let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
        let output = JsonOutput::lines_to(Box::new(buf.clone()));

        output.write(&report("a.jpg")).unwrap();
        output.write(&report("b.jpg")).unwrap();
        output.flush().unwrap();

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["shape"], "oval");
        }
    }

    #[test]
    fn test_array_mode_buffers_until_flush() {
        let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
        let output = JsonOutput::array_to(Box::new(buf.clone()), false);

        output.write(&report("a.jpg")).unwrap();
        assert!(buf.0.lock().unwrap().is_empty());

        output.write(&report("b.jpg")).unwrap();
        output.flush().unwrap();

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["path"], "a.jpg");
    }

    #[test]
    fn test_pretty_array_output() {
        let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
        let output = JsonOutput::array_to(Box::new(buf.clone()), true);

        output.write(&report("a.jpg")).unwrap();
        output.flush().unwrap();

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(text.starts_with("[\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
