//! Bound-device query on a raw socket.

use std::os::fd::AsFd;

use nix::errno::Errno;

/// Capacity of an interface name buffer, terminator included.
pub const IFNAMSIZ: usize = nix::libc::IFNAMSIZ;

/// Reads the name of the device `fd` is bound to into `buf`.
///
/// Returns the number of bytes written. A socket with no device binding
/// yields `0`. The length reported by the kernel is authoritative; the name is
/// cut at the first NUL inside it and at `buf.len()`.
///
/// # Errors
///
/// Returns the OS error from `getsockopt(SOL_SOCKET, SO_BINDTODEVICE)`.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn bound_device<Fd: AsFd>(fd: &Fd, buf: &mut [u8]) -> Result<usize, Errno> {
    use std::os::unix::ffi::OsStrExt;

    use nix::sys::socket::{getsockopt, sockopt};

    let name = getsockopt(fd, sockopt::BindToDevice)?;
    Ok(copy_device_name(name.as_bytes(), buf))
}

/// `SO_BINDTODEVICE` is Linux-only.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn bound_device<Fd: AsFd>(_fd: &Fd, _buf: &mut [u8]) -> Result<usize, Errno> {
    Err(Errno::ENOPROTOOPT)
}

#[cfg_attr(
    not(any(target_os = "linux", target_os = "android")),
    allow(dead_code)
)]
pub(crate) fn copy_device_name(name: &[u8], buf: &mut [u8]) -> usize {
    let name = match name.iter().position(|&b| b == 0) {
        Some(nul) => &name[..nul],
        None => name,
    };
    let len = name.len().min(buf.len());
    buf[..len].copy_from_slice(&name[..len]);
    len
}
