//! Canned-response JSON-RPC transport for tests.
//!
//! Queues responses per RPC method and replays them in order, so call flows
//! can be exercised end to end without a node. Methods with no queued
//! response fail with a transport error, which keeps a test from silently
//! consuming another test's fixtures.
//!
//! ```no_run
//! use quantumdex_client::common::mock_rpc::MockTransport;
//! use serde_json::json;
//!
//! let transport = MockTransport::new();
//! transport.respond("eth_chainId", json!("0x1"));
//! let web3 = web3::Web3::new(transport.clone());
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use futures::future::{Ready, ready};
use jsonrpc_core::{Call, Value};
use web3::error::{self, TransportError};
use web3::{RequestId, Transport, helpers};

#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    responses: HashMap<String, VecDeque<error::Result<Value>>>,
    requests: Vec<(String, Vec<Value>)>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response for the given RPC method.
    pub fn respond(&self, method: &str, response: Value) {
        self.push(method, Ok(response));
    }

    /// Queue an RPC-level error (the shape of an on-chain revert or a missing
    /// contract method) for the given RPC method.
    pub fn respond_error(&self, method: &str, message: &str) {
        let err = error::Error::Rpc(jsonrpc_core::Error {
            code: jsonrpc_core::ErrorCode::ServerError(3),
            message: message.to_string(),
            data: None,
        });
        self.push(method, Err(err));
    }

    /// Every request issued so far, in order, as `(method, params)`.
    pub fn requests(&self) -> Vec<(String, Vec<Value>)> {
        self.inner.lock().expect("mock transport poisoned").requests.clone()
    }

    /// Number of requests issued for one RPC method.
    pub fn calls_of(&self, method: &str) -> usize {
        self.requests().iter().filter(|(m, _)| m == method).count()
    }

    fn push(&self, method: &str, response: error::Result<Value>) {
        self.inner
            .lock()
            .expect("mock transport poisoned")
            .responses
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }
}

impl Transport for MockTransport {
    type Out = Ready<error::Result<Value>>;

    fn prepare(&self, method: &str, params: Vec<Value>) -> (RequestId, Call) {
        let request = helpers::build_request(1, method, params.clone());
        let mut inner = self.inner.lock().expect("mock transport poisoned");
        inner.requests.push((method.to_string(), params));
        (inner.requests.len(), request)
    }

    fn send(&self, _id: RequestId, request: Call) -> Self::Out {
        let method = match &request {
            Call::MethodCall(call) => call.method.clone(),
            _ => String::new(),
        };
        let response = self
            .inner
            .lock()
            .expect("mock transport poisoned")
            .responses
            .get_mut(&method)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(error::Error::Transport(TransportError::Message(format!(
                    "no mock response queued for {method}"
                ))))
            });
        ready(response)
    }
}
