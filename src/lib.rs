//! `$request_vrf`: the VRF a request arrived on.
//!
//! On Linux, a listening socket can be bound to a VRF master device with
//! `SO_BINDTODEVICE`; connections accepted on it stay scoped to that routing
//! domain. This crate exposes the device name as a per-request variable:
//! - **Lazy**: the socket is queried on first lookup only
//! - **Cached**: later lookups within the same request reuse the value
//! - **Non-fatal**: a failed query is logged and reads as an empty string
//!
//! Connections in the default VRF resolve to a valid empty value.
//!
//! # Core Types
//!
//! - [`VrfExtModule`]: Registers `$request_vrf` during preconfiguration
//! - [`VariableRegistry`]: Configuration-time table of named variables
//! - [`Request`]: One transaction with its pool and variable cache
//! - [`Connection`]: The socket a request arrived on
//! - [`VariableValue`]: A resolved (or unresolved) variable value
//!
//! # Examples
//!
//! ```
//! use std::net::TcpListener;
//! use vrf_ext::{
//!     Request, RequestPool, SocketConnection, VariableRegistry, VrfExtModule, REQUEST_VRF,
//! };
//!
//! let mut registry = VariableRegistry::new();
//! registry
//!     .configure(&[&VrfExtModule::default()])
//!     .expect("module registers its variable");
//!
//! let listener = TcpListener::bind("127.0.0.1:0").unwrap();
//! let conn = SocketConnection::new(1, listener);
//! let request = Request::new("req-123", &conn, RequestPool::new());
//!
//! let vrf = request.variable(&registry, REQUEST_VRF).expect("registered");
//! println!("request arrived on VRF {:?}", vrf.as_str());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod connection;
mod error;
mod logging;
mod module;
mod pool;
mod request;
mod resolver;
pub mod sys;
mod value;
mod variable;

pub use config::VrfExtConfig;
pub use connection::{Connection, SocketConnection};
pub use error::{AllocError, Error, ResolveError, Result};
pub use logging::ConnectionLog;
pub use module::{HttpModule, VrfExtModule};
pub use pool::{RequestPool, DEFAULT_POOL_SIZE};
pub use request::Request;
pub use resolver::{resolve, RequestVrf, REQUEST_VRF};
pub use value::VariableValue;
pub use variable::{handler, GetHandler, Variable, VariableFlags, VariableRegistry};
