//! Stage contract and the composed pipeline

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;
use crate::transport::Transport;

/// One middleware behavior in the request pipeline.
///
/// A stage receives an immutable request and the continuation representing
/// the rest of the chain, transport included. It may transform the request
/// before running the continuation and may act on the response afterwards.
/// Stages hold only configuration captured at construction; one instance
/// serves concurrent requests without interference.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Process a request, delegating to the rest of the chain via `next`
    async fn process(&self, request: Request, next: Next<'_>) -> Result<Response>;
}

/// The remaining chain after the current stage.
///
/// An explicit continuation over the stage list: `run` peels off the next
/// stage, or hands the request to the transport once the list is exhausted.
/// `Copy`, so a stage may run it more than once (the redirect stage does).
#[derive(Clone, Copy)]
pub struct Next<'a> {
    stages: &'a [Arc<dyn Stage>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    pub(crate) fn new(stages: &'a [Arc<dyn Stage>], transport: &'a dyn Transport) -> Self {
        Self { stages, transport }
    }

    /// Run the remaining chain to completion
    pub async fn run(self, request: Request) -> Result<Response> {
        match self.stages.split_first() {
            Some((stage, rest)) => {
                stage
                    .process(request, Next::new(rest, self.transport))
                    .await
            }
            None => Ok(self.transport.send(request).await?),
        }
    }
}

/// The composed, ordered chain of stages plus the transport.
///
/// Immutable once built; share one instance across concurrent callers via
/// `Arc`. Stage order is caller-controlled and significant: the first stage
/// in the list is outermost.
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
    transport: Arc<dyn Transport>,
}

impl Pipeline {
    pub(crate) fn new(stages: Vec<Arc<dyn Stage>>, transport: Arc<dyn Transport>) -> Self {
        Self { stages, transport }
    }

    /// Run a request through every stage and the transport
    pub async fn execute(&self, request: Request) -> Result<Response> {
        Next::new(&self.stages, self.transport.as_ref())
            .run(request)
            .await
    }

    /// Number of stages ahead of the transport
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}
