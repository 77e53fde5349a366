use std::fmt;

use nix::errno::Errno;

/// Logger bound to one request on one connection.
///
/// `ConnectionLog` is obtained from [`Request::log`](crate::Request::log).
/// Every event it emits carries the request ID and connection number, so a
/// failed lookup can be traced back to the socket it was made on.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionLog<'a> {
    request_id: &'a str,
    connection: u64,
}

impl<'a> ConnectionLog<'a> {
    pub(crate) fn new(request_id: &'a str, connection: u64) -> Self {
        Self {
            request_id,
            connection,
        }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Returns the connection number associated with this logger.
    pub fn connection(&self) -> u64 {
        self.connection
    }

    /// Logs an error-level message.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        tracing::error!(
            request_id = %self.request_id,
            connection = self.connection,
            "{}",
            args
        );
    }

    /// Logs an error-level message together with the OS error that caused it.
    ///
    /// ```no_run
    /// # use vrf_ext::ConnectionLog;
    /// # use nix::errno::Errno;
    /// # fn example(log: &ConnectionLog) {
    /// log.os_error(Errno::EACCES, format_args!("getsockopt failed"));
    /// # }
    /// ```
    pub fn os_error(&self, errno: Errno, args: fmt::Arguments<'_>) {
        tracing::error!(
            request_id = %self.request_id,
            connection = self.connection,
            errno = %errno,
            code = errno as i32,
            "{}",
            args
        );
    }

    /// Logs a debug-level message.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(
            request_id = %self.request_id,
            connection = self.connection,
            "{}",
            args
        );
    }
}
