use std::io::{self, BufRead};
use std::thread;

use futures_channel::mpsc::{self, UnboundedReceiver};
use tracing::debug;

/// Reads `reader` line by line on a dedicated thread and forwards each line
/// to the returned receiver. The receiver ends when the input is exhausted
/// or after the first read error.
///
/// Lines that are not valid UTF-8 are decoded lossily so that a stray byte
/// never ends the session.
pub fn forward_lines<R>(mut reader: R) -> UnboundedReceiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (sender, receiver) = mpsc::unbounded();

    thread::spawn(move || {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            let line = match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => Ok(decode_line(&buffer)),
                Err(e) => Err(e),
            };
            let failed = line.is_err();

            if sender.unbounded_send(line).is_err() {
                debug!("Line receiver dropped, stopping input thread");
                break;
            }
            if failed {
                break;
            }
        }
    });

    receiver
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

pub fn stdin_lines() -> UnboundedReceiver<io::Result<String>> {
    forward_lines(io::BufReader::new(io::stdin()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use rstest::*;
    use std::io::Cursor;

    async fn collect_lines(input: &'static [u8]) -> Vec<String> {
        forward_lines(Cursor::new(input))
            .map(|line| line.expect("Cursor reads cannot fail"))
            .collect()
            .await
    }

    #[compio::test]
    async fn forwards_every_line_then_ends() {
        let lines = collect_lines(b"CREATE a\n\nLIST\r\n").await;
        assert_eq!(lines, vec!["CREATE a", "", "LIST"]);
    }

    #[compio::test]
    async fn invalid_utf8_is_decoded_and_later_lines_still_arrive() {
        let lines = collect_lines(b"CREATE a\nCREATE caf\xe9\nLIST\n").await;
        assert_eq!(lines, vec!["CREATE a", "CREATE caf\u{FFFD}", "LIST"]);
    }

    #[compio::test]
    async fn last_line_without_newline_is_forwarded() {
        let lines = collect_lines(b"CREATE a\nLIST").await;
        assert_eq!(lines, vec!["CREATE a", "LIST"]);
    }

    #[rstest]
    #[case(b"LIST\n".as_slice(), "LIST")]
    #[case(b"LIST\r\n".as_slice(), "LIST")]
    #[case(b"LIST\r".as_slice(), "LIST")]
    #[case(b"LIST".as_slice(), "LIST")]
    #[case(b"\xff\n".as_slice(), "\u{FFFD}")]
    fn decode_line_strips_line_ending(#[case] raw: &[u8], #[case] expected: &str) {
        assert_eq!(decode_line(raw), expected);
    }
}
