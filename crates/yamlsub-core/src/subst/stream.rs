//! Streaming rewrite pipeline
//!
//! A producer thread rewrites the source line by line and feeds a bounded
//! byte channel; the consumer reads from the other end on the calling
//! thread. Decoding can therefore start before the whole input has been
//! rewritten, with at most one rewritten line in flight.

use std::collections::HashMap;
use std::io::{self, BufRead, Read};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread;

use crate::error::YamlsubError;
use crate::subst::extract::extract_occurrences;
use crate::subst::rewrite::substitute_line;

/// Bound on in-flight rewritten lines. A slow reader blocks the producer
/// on `send` instead of growing a buffer.
const CHANNEL_BOUND: usize = 1;

/// Read end of the rewrite pipeline.
///
/// Chunks arrive one rewritten line at a time, in the order they were
/// rewritten. A disconnected channel is end-of-stream.
pub(crate) struct ChannelReader {
    receiver: Receiver<Vec<u8>>,
    chunk: Vec<u8>,
    offset: usize,
}

impl ChannelReader {
    fn new(receiver: Receiver<Vec<u8>>) -> Self {
        Self {
            receiver,
            chunk: Vec::new(),
            offset: 0,
        }
    }
}

impl Read for ChannelReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.offset == self.chunk.len() {
            match self.receiver.recv() {
                Ok(chunk) => {
                    self.chunk = chunk;
                    self.offset = 0;
                }
                // Sender dropped: the producer is done.
                Err(_) => return Ok(0),
            }
        }
        let n = (self.chunk.len() - self.offset).min(buf.len());
        buf[..n].copy_from_slice(&self.chunk[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

/// Rewrite `source` line by line into `sender`, one chunk per line.
///
/// Returns every error accumulated: substitution misses, a source read
/// failure, or a failed send when the reader has gone away. A failed send
/// aborts the loop without retrying. The sender is dropped on return,
/// which signals end-of-stream to the reader.
fn pump_lines<R: BufRead>(
    source: R,
    variables: &HashMap<String, String>,
    sender: SyncSender<Vec<u8>>,
) -> Vec<YamlsubError> {
    let mut errors = Vec::new();

    for line in source.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                errors.push(YamlsubError::Io(err));
                break;
            }
        };

        let occurrences = extract_occurrences(&line);
        let (mut rewritten, line_errors) = substitute_line(&line, variables, &occurrences);
        errors.extend(line_errors);

        rewritten.push('\n');
        if sender.send(rewritten.into_bytes()).is_err() {
            errors.push(YamlsubError::PipeClosed);
            break;
        }
    }

    errors
}

/// Run `consume` against the read end of a rewrite pipeline fed by a
/// producer thread.
///
/// The consumer runs on the calling thread and owns the reader; dropping it
/// (which `consume` does on return) unblocks a producer stuck on a full
/// channel. The producer owns its error list for its whole lifetime and
/// hands it back through `join`, which only happens after `consume` has
/// returned, so the two execution contexts share nothing mutable but the
/// channel itself.
pub(crate) fn with_rewritten_stream<R, F, T>(
    source: R,
    variables: &HashMap<String, String>,
    consume: F,
) -> (T, Vec<YamlsubError>)
where
    R: BufRead + Send,
    F: FnOnce(ChannelReader) -> T,
{
    let (sender, receiver) = sync_channel(CHANNEL_BOUND);
    let reader = ChannelReader::new(receiver);

    thread::scope(|scope| {
        let producer = scope.spawn(move || pump_lines(source, variables, sender));
        let value = consume(reader);
        let errors = match producer.join() {
            Ok(errors) => errors,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        (value, errors)
    })
}
