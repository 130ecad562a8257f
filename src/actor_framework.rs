use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait and id assignment)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;

    /// Short label used in log fields, e.g. `"product"`.
    const KIND: &'static str;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Overwrite the ID. Only called when the actor generates identifiers.
    fn assign_id(&mut self, id: Self::Id);
}

/// How a `ResourceActor` decides the ID of a newly created item.
pub enum IdAssignment<T: Entity> {
    /// Store the item with whatever ID the caller put on it.
    CallerSupplied,
    /// Generate the ID from the number of items already stored.
    Sequential(Box<dyn Fn(usize) -> T::Id + Send + Sync>),
}

impl<T: Entity> IdAssignment<T> {
    pub fn sequential(next_id_fn: impl Fn(usize) -> T::Id + Send + Sync + 'static) -> Self {
        Self::Sequential(Box::new(next_id_fn))
    }
}

impl<T: Entity> Debug for IdAssignment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdAssignment::CallerSupplied => f.write_str("CallerSupplied"),
            IdAssignment::Sequential(_) => f.write_str("Sequential"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        item: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Single owner of an ordered, append-only collection of entities.
///
/// Every read and write goes through the mailbox, so requests are applied one
/// at a time in arrival order.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    id_assignment: IdAssignment<T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize, id_assignment: IdAssignment<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            id_assignment,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = T::KIND))]
    pub async fn run(mut self) {
        info!(id_assignment = ?self.id_assignment, "ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => self.handle_list(respond_to),
                ResourceRequest::Create { item, respond_to } => self.handle_create(item, respond_to),
                ResourceRequest::Get { id, respond_to } => self.handle_get(id, respond_to),
                ResourceRequest::Shutdown => {
                    info!("ResourceActor shutting down");
                    break;
                }
            }
        }

        info!(stored = self.store.len(), "ResourceActor stopped");
    }

    fn handle_list(&self, respond_to: Response<Vec<T>>) {
        debug!(count = self.store.len(), "Processing list request");
        let _ = respond_to.send(self.store.clone());
    }

    fn handle_create(&mut self, mut item: T, respond_to: Response<T>) {
        if let IdAssignment::Sequential(next_id) = &self.id_assignment {
            item.assign_id(next_id(self.store.len()));
        }
        info!(id = %item.id(), position = self.store.len() + 1, "Item created");
        self.store.push(item.clone());
        let _ = respond_to.send(item);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get(&self, id: T::Id, respond_to: Response<Option<T>>) {
        // First match wins when caller-supplied ids collide.
        let item = self.store.iter().find(|item| *item.id() == id).cloned();
        if item.is_none() {
            debug!("Item not found");
        }
        let _ = respond_to.send(item);
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn create(&self, item: T) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Create { item, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender.send(ResourceRequest::Shutdown)
            .await.map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    impl Note {
        fn new(id: u32, text: &str) -> Self {
            Self { id, text: text.to_string() }
        }
    }

    impl Entity for Note {
        type Id = u32;
        const KIND: &'static str = "note";

        fn id(&self) -> &u32 { &self.id }

        fn assign_id(&mut self, id: u32) {
            self.id = id;
        }
    }

    fn spawn_actor(id_assignment: IdAssignment<Note>) -> ResourceClient<Note> {
        let (actor, client) = ResourceActor::new(10, id_assignment);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_sequential_ids_follow_insertion_position() {
        let client = spawn_actor(IdAssignment::sequential(|count| count as u32 + 1));

        let first = client.create(Note::new(42, "first")).await.unwrap();
        let second = client.create(Note::new(42, "second")).await.unwrap();
        let third = client.create(Note::new(0, "third")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);

        let all = client.list().await.unwrap();
        let texts: Vec<&str> = all.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(all.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_caller_supplied_ids_are_kept() {
        let client = spawn_actor(IdAssignment::CallerSupplied);

        let stored = client.create(Note::new(7, "seven")).await.unwrap();
        assert_eq!(stored, Note::new(7, "seven"));

        let fetched = client.get(7).await.unwrap();
        assert_eq!(fetched, Some(Note::new(7, "seven")));
    }

    #[tokio::test]
    async fn test_get_returns_first_match_for_duplicate_ids() {
        let client = spawn_actor(IdAssignment::CallerSupplied);

        client.create(Note::new(5, "older")).await.unwrap();
        client.create(Note::new(5, "newer")).await.unwrap();

        let fetched = client.get(5).await.unwrap().unwrap();
        assert_eq!(fetched.text, "older");
        assert_eq!(client.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let client = spawn_actor(IdAssignment::sequential(|count| count as u32 + 1));

        assert!(client.list().await.unwrap().is_empty());
        assert_eq!(client.get(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_requests_after_shutdown_fail() {
        let (actor, client) = ResourceActor::<Note>::new(10, IdAssignment::CallerSupplied);
        let handle = tokio::spawn(actor.run());

        client.shutdown().await.unwrap();
        handle.await.unwrap();

        assert_eq!(client.list().await, Err(FrameworkError::ActorClosed));
    }
}
