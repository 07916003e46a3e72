//! # Request Messages
//!
//! The wire format between a [`ResourceClient`](crate::ResourceClient) and
//! its [`ResourceActor`](crate::ResourceActor): standard CRUD variants plus
//! `Action` for entity-specific operations. Every variant carries a oneshot
//! sender the actor replies on.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Reply channel carried inside every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A single request to a resource actor.
///
/// Generic over the entity type, so the payloads are the entity's own
/// associated types and cross-entity mixups fail to compile.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
