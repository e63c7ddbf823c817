use std::io::{self, BufRead, BufReader, PipeReader};
use std::process::{Child, Command, Stdio};

use ripper_logging::ripper_debug;

use crate::RunError;

/// Lines of the child's combined stdout/stderr.
pub type ChildLines = LineSource<BufReader<PipeReader>>;

/// Spawns `command` with stdout and stderr sharing one pipe, so lines arrive
/// in exactly the order the child wrote them.
pub fn start(command: &[String]) -> Result<RunningProcess, RunError> {
    let (program, args) = command.split_first().ok_or(RunError::EmptyCommand)?;
    let (reader, writer) = io::pipe()?;

    // The Command holds our copies of the write end; it must be dropped
    // before reading or the stream never reaches EOF.
    let child = {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);
        cmd.spawn().map_err(|source| RunError::Spawn {
            program: program.clone(),
            source,
        })?
    };
    ripper_debug!("spawned {} (pid {})", program, child.id());

    Ok(RunningProcess {
        child,
        lines: LineSource::new(BufReader::new(reader)),
    })
}

/// A started child process and its output stream.
pub struct RunningProcess {
    child: Child,
    lines: ChildLines,
}

impl RunningProcess {
    /// Blocks per line; ends when the child closes its output.
    pub fn lines(&mut self) -> &mut ChildLines {
        &mut self.lines
    }

    /// Blocks until the child exits. Signal termination is reported as -1.
    pub fn wait(mut self) -> Result<i32, RunError> {
        let status = self.child.wait()?;
        Ok(status.code().unwrap_or(-1))
    }

    /// Kills and reaps the child after a read failure.
    pub fn abort(mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Splits a byte stream into text lines on `\n`, `\r` or `\r\n`.
///
/// The downloader redraws its progress line with bare carriage returns, so
/// each redraw becomes its own line. Invalid UTF-8 is replaced, not fatal.
pub struct LineSource<R> {
    reader: R,
    skip_lf: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if available.is_empty() {
                if buf.is_empty() {
                    return Ok(None);
                }
                break;
            }

            let mut start = 0;
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    start = 1;
                }
            }

            match available[start..]
                .iter()
                .position(|byte| *byte == b'\n' || *byte == b'\r')
            {
                Some(offset) => {
                    let end = start + offset;
                    buf.extend_from_slice(&available[start..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    break;
                }
                None => {
                    buf.extend_from_slice(&available[start..]);
                    let len = available.len();
                    self.reader.consume(len);
                }
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}
