// src/readers/linesource.rs

//! Sources of raw `logcat` lines: STDIN, an `adb logcat` subprocess, or
//! anything else that implements [`BufRead`].

use std::io::{
    BufRead,
    BufReader,
    Error,
    Read,
    Result,
};
use std::process::{
    Child,
    ChildStdout,
    Command,
    Stdio,
};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{Bytes, NLu8, ADB_LOGCAT};
#[allow(unused_imports)]
use crate::de_err;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LineSource
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A blocking source of raw lines.
pub trait LineSource {
    /// Append the next line, including its `'\n'` if any, to `buffer`.
    ///
    /// Returns the count of bytes read. `0` is the end of the stream.
    fn read_line(&mut self, buffer: &mut Bytes) -> Result<usize>;
}

/// Any buffered reader, e.g. `std::io::stdin().lock()` or a
/// `std::io::Cursor` in tests.
impl<R: BufRead> LineSource for R {
    #[inline(always)]
    fn read_line(&mut self, buffer: &mut Bytes) -> Result<usize> {
        self.read_until(NLu8, buffer)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// AdbSource
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Lines from the stdout of a `adb <ARGS> logcat` subprocess.
///
/// The subprocess is killed and reaped when the `AdbSource` is dropped.
pub struct AdbSource {
    process: Child,
    reader: BufReader<ChildStdout>,
}

impl std::fmt::Debug for AdbSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdbSource")
            .field("pid", &self.process.id())
            .finish()
    }
}

impl AdbSource {
    /// Spawn `adb_path` with `adb_args` forwarded verbatim, followed by
    /// `logcat`.
    pub fn spawn(adb_path: &str, adb_args: &[String]) -> Result<AdbSource> {
        defn!("({:?}, {:?})", adb_path, adb_args);
        let result = Command::new(adb_path)
            .args(adb_args)
            .arg(ADB_LOGCAT)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn();
        let mut process: Child = match result {
            Ok(p) => p,
            Err(err) => {
                defx!("Command::spawn() returned {}", err);
                return Result::Err(
                    Error::new(
                        err.kind(),
                        format!("failed to start {:?}: {}", adb_path, err),
                    )
                );
            }
        };
        defo!("adb process PID {}", process.id());
        let stdout: ChildStdout = match process.stdout.take() {
            Some(s) => s,
            None => {
                let s = format!("adb process {} stdout was None", process.id());
                defx!("{}", s);
                _ = process.kill();
                _ = process.wait();
                return Result::Err(Error::other(s));
            }
        };
        defx!();

        Result::Ok(AdbSource {
            process,
            reader: BufReader::new(stdout),
        })
    }

    /// PID of the `adb` subprocess.
    pub fn id(&self) -> u32 {
        self.process.id()
    }
}

/// Delegates to the buffered subprocess stdout, so the blanket
/// [`LineSource`] implementation applies.
impl Read for AdbSource {
    #[inline(always)]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for AdbSource {
    #[inline(always)]
    fn fill_buf(&mut self) -> Result<&[u8]> {
        self.reader.fill_buf()
    }

    #[inline(always)]
    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}

impl Drop for AdbSource {
    fn drop(&mut self) {
        defn!("adb process PID {}", self.process.id());
        match self.process.try_wait() {
            Ok(Some(_status)) => {
                defo!("adb process already exited {:?}", _status);
            }
            Ok(None) => {
                if let Err(_err) = self.process.kill() {
                    de_err!("adb process {} kill() error {}", self.process.id(), _err);
                }
                _ = self.process.wait();
            }
            Err(_err) => {
                de_err!("adb process {} try_wait() error {}", self.process.id(), _err);
            }
        }
        defx!();
    }
}
