//! Cryptographically secure randomness.

use std::{io, os::raw::c_int};

/// The maximum number of bytes a single `getentropy` call may return.
const MAX_REQUEST: usize = 256;

/// Populates the provided slice with cryptographically strong entropy.
///
/// Requests are limited to 256 bytes, which is more than any key or entropy
/// buffer this crate draws.
pub fn get_entropy(mut buf: impl AsMut<[u8]>) -> io::Result<()> {
    let buf = buf.as_mut();
    if buf.len() > MAX_REQUEST {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot request more than {MAX_REQUEST} bytes of entropy at once"),
        ));
    }

    let result = unsafe { getentropy(buf.as_mut_ptr(), buf.len()) };
    if result >= 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

extern "C" {
    fn getentropy(buffer: *mut u8, len: usize) -> c_int;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_os_entropy() {
        let mut buf = [0u8; 32];
        assert!(get_entropy(&mut buf[..16]).is_ok());
        assert!(get_entropy(&mut buf).is_ok());
        assert_ne!(buf, [0; 32]);
    }

    #[test]
    fn error_reading_more_than_256_bytes() {
        let mut buf = [0u8; 257];
        assert!(get_entropy(&mut buf).is_err());
    }
}
