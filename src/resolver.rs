//! Resolution of `$request_vrf` from the connection socket.
//!
//! A socket accepted on a listener bound to a VRF device (`SO_BINDTODEVICE`)
//! reports that device's name. Sockets in the default VRF report an empty
//! name, which is a valid value rather than an error.

use crate::config::VrfExtConfig;
use crate::connection::Connection;
use crate::error::ResolveError;
use crate::pool::RequestPool;
use crate::request::Request;
use crate::sys::IFNAMSIZ;
use crate::value::VariableValue;

/// Name of the variable, without the leading `$`.
pub const REQUEST_VRF: &str = "request_vrf";

/// Resolves the VRF device of `connection`.
///
/// Takes one [`IFNAMSIZ`] buffer from `pool` and fills it from the socket.
/// The length returned by the query is authoritative for the result. Calling
/// this again on an unchanged connection returns an identical value.
///
/// # Errors
///
/// - [`ResolveError::AllocationExhausted`] if `pool` cannot supply the buffer.
///   The socket is not queried in that case.
/// - [`ResolveError::PlatformQueryFailed`] if the socket query fails.
pub fn resolve(
    connection: &dyn Connection,
    pool: &RequestPool,
) -> Result<VariableValue, ResolveError> {
    let mut name = pool.allocate(IFNAMSIZ)?;

    let len = connection
        .bound_device(&mut name)
        .map_err(|errno| ResolveError::PlatformQueryFailed { errno })?;

    name.truncate(len);
    Ok(VariableValue::new(name))
}

/// Variable handler for `$request_vrf`.
///
/// Failures are logged on the request's connection and turned into an
/// unresolved value; they never fail the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestVrf {
    config: VrfExtConfig,
}

impl RequestVrf {
    /// Creates a handler using `config`.
    pub fn new(config: VrfExtConfig) -> Self {
        Self { config }
    }

    /// Produces the value of `$request_vrf` for `request`.
    pub fn get(&self, request: &Request<'_>) -> VariableValue {
        let log = request.log();

        match resolve(request.connection(), request.pool()) {
            Ok(value) => {
                if self.config.logs_resolved() {
                    log.debug(format_args!("getting $request_vrf value = \"{}\"", value));
                }
                value
            }
            Err(err @ ResolveError::PlatformQueryFailed { errno }) => {
                log.os_error(errno, format_args!("{}", err));
                VariableValue::unresolved()
            }
            Err(err @ ResolveError::AllocationExhausted(_)) => {
                log.error(format_args!("{}", err));
                VariableValue::unresolved()
            }
        }
    }
}
