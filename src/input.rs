//! Piped standard input with an idle timeout
//!
//! A reader thread streams chunks over a channel while the caller races a
//! fixed idle timer against the first chunk. If nothing arrives in time the
//! read resolves empty; once data has started flowing, the read accumulates
//! until end of stream.

use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// How long to wait for a first chunk before deciding nothing was piped.
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(100);

/// Read text piped into this process, or an empty string if stdin stays
/// silent for [`IDLE_TIMEOUT`].
pub fn read_piped_input() -> String {
    read_with_idle_timeout(std::io::stdin(), IDLE_TIMEOUT)
}

/// Generic core of [`read_piped_input`], testable with any reader.
///
/// On timeout the reader thread is left parked on its blocking read; it holds
/// no resources beyond the reader itself and exits with the process.
pub fn read_with_idle_timeout<R>(mut reader: R, idle: Duration) -> String
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Vec<u8>>();
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        loop {
            match reader.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut data = Vec::new();
    match rx.recv_timeout(idle) {
        Ok(chunk) => data.extend(chunk),
        Err(_) => return String::new(),
    }
    // Data has started arriving; from here on wait for the stream to finish.
    while let Ok(chunk) = rx.recv() {
        data.extend(chunk);
    }
    String::from_utf8_lossy(&data).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that never produces data within any reasonable idle window.
    struct SilentReader;

    impl Read for SilentReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            thread::sleep(Duration::from_millis(200));
            Ok(0)
        }
    }

    #[test]
    fn test_read_accumulates_until_eof() {
        let text = "piped in over the command line\nsecond line\n";
        let result = read_with_idle_timeout(Cursor::new(text.to_string()), Duration::from_millis(50));
        assert_eq!(result, text);
    }

    #[test]
    fn test_silent_reader_resolves_empty_after_idle_timeout() {
        let result = read_with_idle_timeout(SilentReader, Duration::from_millis(20));
        assert_eq!(result, "");
    }
}
