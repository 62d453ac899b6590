//! Retry wrappers for blocking calls interrupted by signals.
//!
//! A TUI process takes `SIGWINCH` on every terminal resize, so any blocking
//! syscall can come back with `EINTR` at an arbitrary moment. The wrappers
//! here transparently re-invoke the call; every other failure is re-raised
//! unchanged.

use std::io;

/// Re-invoke `op` for as long as its failure is classified benign by
/// `is_benign`. The first success, or the first non-benign error, is
/// returned to the caller.
pub fn retry_while<T, E>(
    mut op: impl FnMut() -> Result<T, E>,
    is_benign: impl Fn(&E) -> bool,
) -> Result<T, E> {
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if is_benign(&err) => continue,
            Err(err) => return Err(err),
        }
    }
}

/// Retry `op` when it fails with `EINTR` (a signal arrived mid-call).
pub fn retry_on_interrupt<T>(op: impl FnMut() -> io::Result<T>) -> io::Result<T> {
    retry_while(op, |err| err.kind() == io::ErrorKind::Interrupted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_success_passes_through() {
        let result: io::Result<u32> = retry_on_interrupt(|| Ok(7));
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn interruptions_are_retried() {
        let mut attempts = 0;
        let result = retry_on_interrupt(|| {
            attempts += 1;
            if attempts < 4 {
                Err(io::Error::new(io::ErrorKind::Interrupted, "EINTR"))
            } else {
                Ok("done")
            }
        });
        assert_eq!(result.unwrap(), "done");
        assert_eq!(attempts, 4);
    }

    #[test]
    fn other_errors_are_raised_unchanged() {
        let mut attempts = 0;
        let result: io::Result<()> = retry_on_interrupt(|| {
            attempts += 1;
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "EACCES"))
        });
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(attempts, 1);
    }

    #[test]
    fn custom_benign_predicate() {
        let mut attempts = 0;
        let result: Result<u32, &str> = retry_while(
            || {
                attempts += 1;
                if attempts < 3 {
                    Err("again")
                } else {
                    Ok(attempts)
                }
            },
            |err| *err == "again",
        );
        assert_eq!(result.unwrap(), 3);
    }
}
