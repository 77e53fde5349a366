//! Property tests for `$request_vrf` resolution.
//!
//! These cover the lookup contract end to end: registry, request cache,
//! resolver and a scripted connection.

mod common;

use common::{at_level, capture_logs, FakeConnection};
use nix::errno::Errno;
use proptest::prelude::*;
use tracing::Level;
use vrf_ext::sys::IFNAMSIZ;
use vrf_ext::{resolve, Request, RequestPool, VariableRegistry, VrfExtModule, REQUEST_VRF};

// Strategy: Linux interface names fit in IFNAMSIZ - 1 bytes
fn arb_device() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_.-]{0,14}").unwrap()
}

// Strategy: errors getsockopt can report for SO_BINDTODEVICE
fn arb_errno() -> impl Strategy<Value = Errno> {
    prop_oneof![
        Just(Errno::EACCES),
        Just(Errno::EPERM),
        Just(Errno::EBADF),
        Just(Errno::ENOTSOCK),
        Just(Errno::ENOPROTOOPT),
        Just(Errno::EINVAL),
    ]
}

fn registry() -> VariableRegistry {
    let mut registry = VariableRegistry::new();
    registry.configure(&[&VrfExtModule::default()]).unwrap();
    registry
}

proptest! {
    /// Property: a bound device resolves to exactly its name, once per request
    #[test]
    fn proptest_bound_device_resolves_exactly(device in arb_device()) {
        let registry = registry();
        let conn = FakeConnection::bound_to(&device);
        let request = Request::new("req-prop", &conn, RequestPool::new());

        let first = request.variable(&registry, REQUEST_VRF).unwrap();
        let second = request.variable(&registry, REQUEST_VRF).unwrap();

        prop_assert!(first.is_valid());
        prop_assert_eq!(first.as_str(), device.as_str());
        prop_assert!(first.len() < IFNAMSIZ);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(conn.queries(), 1);
    }

    /// Property: every query failure yields an unresolved value and one error line
    #[test]
    fn proptest_query_failure_is_unresolved(errno in arb_errno()) {
        let registry = registry();
        let conn = FakeConnection::failing(errno);
        let request = Request::new("req-prop", &conn, RequestPool::new());

        let (value, events) = capture_logs(|| request.variable(&registry, REQUEST_VRF).unwrap());

        prop_assert!(!value.is_valid());
        prop_assert_eq!(value.as_str(), "");

        let errors = at_level(&events, Level::ERROR);
        prop_assert_eq!(errors.len(), 1);
        let code = (errno as i32).to_string();
        prop_assert_eq!(errors[0].field("code"), Some(code.as_str()));
    }

    /// Property: pools smaller than one name buffer never reach the socket
    #[test]
    fn proptest_small_pool_never_queries(capacity in 0usize..IFNAMSIZ, device in arb_device()) {
        let conn = FakeConnection::bound_to(&device);
        let pool = RequestPool::with_capacity(capacity);

        prop_assert!(resolve(&conn, &pool).is_err());
        prop_assert_eq!(conn.queries(), 0);
        prop_assert_eq!(pool.remaining(), capacity);
    }

    /// Property: resolution is idempotent on an unchanged connection
    #[test]
    fn proptest_resolve_idempotent(device in arb_device()) {
        let conn = FakeConnection::bound_to(&device);
        let pool = RequestPool::new();

        let first = resolve(&conn, &pool).unwrap();
        let second = resolve(&conn, &pool).unwrap();

        prop_assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
