//! # Mock Clients for Testing
//!
//! Two ways to test code that talks to an actor without spawning the real
//! thing:
//!
//! - [`MockClient`]: a fluent expectation API. Queue up the responses the
//!   "actor" should give, run the code under test, then [`verify`] that
//!   every expectation was consumed. A background task answers requests from
//!   the queue, so there is real channel traffic but no real state.
//! - [`create_mock_client`]: the low-level variant. You get the client and
//!   the raw request receiver; use the `expect_*` helpers to pull requests
//!   off the channel, assert on their payloads, and answer them by hand.
//!
//! Prefer `MockClient` when you only care about responses, and the raw
//! receiver when the test needs to inspect what was sent.
//!
//! Mocks exist for testing logic *around* a client, such as a wrapper that
//! translates action results. Actor behavior itself is better tested against
//! a real [`ResourceActor`](crate::ResourceActor); spawning one in a test is
//! cheap.
//!
//! [`verify`]: MockClient::verify

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A queued response for one expected request.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// Mock client with queued expectations.
///
/// ```rust,ignore
/// let mut mock = MockClient::<Store>::new();
/// mock.expect_get(StoreId(1)).return_ok(Some(store));
/// mock.expect_action(StoreId(1)).return_ok(StoreActionResult::DeleteProduct(()));
///
/// let client = StoreClient::new(mock.client());
/// // drive the code under test ...
/// mock.verify();
/// ```
///
/// Requests are matched against expectations in FIFO order; a request with no
/// matching expectation panics the responder task, which surfaces in the test
/// as a dropped reply channel.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with an empty expectation queue.
    ///
    /// Must be called from within a Tokio runtime; the responder runs as a
    /// spawned task.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Queues an expectation for a `get` request.
    pub fn expect_get(&mut self, _id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Queues an expectation for a `create` request.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Queues an expectation for an `action` request.
    pub fn expect_action(&mut self, _id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                response: Ok(value),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                response: Err(error),
            });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Ok(result),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Err(error),
            });
    }
}

/// Creates a bare mock client plus the receiver its requests arrive on.
///
/// For tests that want to assert on request payloads before answering. Pair
/// with [`expect_create`], [`expect_get`], and [`expect_action`].
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Receives the next request, asserting it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next request, asserting it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next request, asserting it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ActorEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Coupon {
        id: u32,
        code: String,
        uses_left: u32,
    }

    #[derive(Debug)]
    struct CouponCreate {
        code: String,
        uses: u32,
    }

    #[derive(Debug)]
    struct CouponUpdate;

    #[derive(Debug)]
    enum CouponAction {
        Redeem,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("coupon exhausted")]
    struct CouponError;

    #[async_trait]
    impl ActorEntity for Coupon {
        type Id = u32;
        type Create = CouponCreate;
        type Update = CouponUpdate;
        type Action = CouponAction;
        type ActionResult = u32;
        type Context = ();
        type Error = CouponError;

        fn from_create_params(id: u32, params: CouponCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                code: params.code,
                uses_left: params.uses,
            })
        }

        async fn on_update(
            &mut self,
            _update: CouponUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CouponAction,
            _ctx: &Self::Context,
        ) -> Result<u32, Self::Error> {
            match action {
                CouponAction::Redeem => {
                    self.uses_left = self.uses_left.checked_sub(1).ok_or(CouponError)?;
                    Ok(self.uses_left)
                }
            }
        }
    }

    #[tokio::test]
    async fn raw_mock_answers_create() {
        let (client, mut receiver) = create_mock_client::<Coupon>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(CouponCreate {
                    code: "WELCOME10".to_string(),
                    uses: 3,
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.code, "WELCOME10");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(id) if id == 1));
    }

    #[tokio::test]
    async fn fluent_mock_consumes_expectations_in_order() {
        let mut mock = MockClient::<Coupon>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Coupon {
            id: 1,
            code: "WELCOME10".to_string(),
            uses_left: 3,
        }));
        mock.expect_action(1).return_ok(2);

        let client = mock.client();

        let id = client
            .create(CouponCreate {
                code: "WELCOME10".to_string(),
                uses: 3,
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap().unwrap();
        assert_eq!(fetched.code, "WELCOME10");

        let left = client.perform_action(1, CouponAction::Redeem).await.unwrap();
        assert_eq!(left, 2);

        mock.verify();
    }

    #[tokio::test]
    async fn fluent_mock_injects_errors() {
        let mut mock = MockClient::<Coupon>::new();
        mock.expect_get(7).return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        let result = client.get(7).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }
}
