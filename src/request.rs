use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::connection::Connection;
use crate::logging::ConnectionLog;
use crate::pool::RequestPool;
use crate::value::VariableValue;
use crate::variable::VariableRegistry;

/// One HTTP transaction on an established connection.
///
/// A request owns its [`RequestPool`] and a per-request variable cache.
/// Everything allocated for the request is released when it is dropped.
///
/// # Examples
///
/// ```
/// use std::net::TcpListener;
/// use vrf_ext::{Request, RequestPool, SocketConnection, VariableRegistry};
///
/// let conn = SocketConnection::new(1, TcpListener::bind("127.0.0.1:0").unwrap());
/// let registry = VariableRegistry::new();
/// let request = Request::new("req-1", &conn, RequestPool::new());
///
/// assert!(request.variable(&registry, "unknown").is_none());
/// ```
pub struct Request<'c> {
    request_id: String,
    connection: &'c dyn Connection,
    pool: RequestPool,
    cache: RefCell<HashMap<String, VariableValue>>,
}

impl<'c> Request<'c> {
    /// Creates a request on `connection` backed by `pool`.
    pub fn new(
        request_id: impl Into<String>,
        connection: &'c dyn Connection,
        pool: RequestPool,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            connection,
            pool,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the connection the request arrived on.
    pub fn connection(&self) -> &'c dyn Connection {
        self.connection
    }

    /// Returns the request pool.
    pub fn pool(&self) -> &RequestPool {
        &self.pool
    }

    /// Returns a logger tagged with this request and its connection.
    pub fn log(&self) -> ConnectionLog<'_> {
        ConnectionLog::new(&self.request_id, self.connection.number())
    }

    /// Looks up a variable's value for this request.
    ///
    /// The first lookup runs the variable's handler. Later lookups return the
    /// stored value, unless the variable was registered `no_cacheable` or the
    /// handler returned a non-cacheable value.
    ///
    /// Returns `None` if `name` is not registered.
    pub fn variable(&self, registry: &VariableRegistry, name: &str) -> Option<VariableValue> {
        let variable = registry.get(name)?;

        if let Some(cached) = self.cache.borrow().get(variable.name()) {
            return Some(cached.clone());
        }

        let value = variable.evaluate(self);

        if !variable.flags().no_cacheable && value.is_cacheable() {
            self.cache
                .borrow_mut()
                .insert(variable.name().to_string(), value.clone());
        }

        Some(value)
    }
}

impl fmt::Debug for Request<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("request_id", &self.request_id)
            .field("connection", &self.connection.number())
            .field("pool", &self.pool)
            .field("cached", &self.cache.borrow().len())
            .finish()
    }
}
