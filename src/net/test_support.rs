//! Scripted transports for exercising the client without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;

use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse, Transport};

type Reply = Result<HttpResponse, ApiError>;

/// Replies with queued results in order and records every request.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, error: ApiError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Err(ApiError::Network { message: "no scripted reply".to_owned() }))
    }
}

/// Holds each request open until the test releases it, so resolution order
/// can be chosen independently of send order.
#[derive(Clone, Default)]
pub(crate) struct GatedTransport {
    gates: Arc<Mutex<VecDeque<oneshot::Receiver<Reply>>>>,
}

impl GatedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register the gate for the next request; send on it to resolve that request.
    pub(crate) fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }
}

impl Transport for GatedTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx.await.unwrap_or(Err(ApiError::Unknown)),
            None => Err(ApiError::Network { message: "no gate registered".to_owned() }),
        }
    }
}

pub(crate) fn ok(body: &str) -> Reply {
    Ok(HttpResponse { status: 200, body: body.to_owned() })
}
