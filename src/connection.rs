use std::os::fd::{AsFd, BorrowedFd};

use nix::errno::Errno;

use crate::sys;

/// An established client connection, as seen by variable handlers.
///
/// Handlers only read from a connection: they never touch the data stream
/// and never mutate connection state.
pub trait Connection {
    /// Connection number used to tag log lines.
    fn number(&self) -> u64;

    /// Writes the name of the device the socket is bound to into `buf`.
    ///
    /// Returns the number of bytes written, `0` for an unbound socket.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the socket cannot be queried.
    fn bound_device(&self, buf: &mut [u8]) -> Result<usize, Errno>;
}

/// A [`Connection`] backed by a real socket.
///
/// # Examples
///
/// ```
/// use std::net::TcpListener;
/// use vrf_ext::{Connection, SocketConnection};
///
/// let listener = TcpListener::bind("127.0.0.1:0").unwrap();
/// let conn = SocketConnection::new(1, listener);
/// assert_eq!(conn.number(), 1);
/// ```
#[derive(Debug)]
pub struct SocketConnection<S> {
    number: u64,
    socket: S,
}

impl<S: AsFd> SocketConnection<S> {
    /// Wraps `socket` as connection `number`.
    pub fn new(number: u64, socket: S) -> Self {
        Self { number, socket }
    }

    /// Returns the underlying socket.
    pub fn socket(&self) -> &S {
        &self.socket
    }

    /// Consumes the connection, returning the socket.
    pub fn into_inner(self) -> S {
        self.socket
    }
}

impl<S: AsFd> AsFd for SocketConnection<S> {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.socket.as_fd()
    }
}

impl<S: AsFd> Connection for SocketConnection<S> {
    fn number(&self) -> u64 {
        self.number
    }

    fn bound_device(&self, buf: &mut [u8]) -> Result<usize, Errno> {
        sys::bound_device(&self.socket, buf)
    }
}
