use core::any::Any;

use super::LinkSet;
use crate::{
  actor_id::ActorId,
  actor_prim::{AbstractActor, StrongActorRef},
  messaging::MailboxRecord,
  node_id::NodeId,
  scheduler::ExecutionUnit,
};

struct InertActor {
  node: NodeId,
  id:   ActorId,
}

impl InertActor {
  fn spawn(id: u64) -> StrongActorRef {
    StrongActorRef::new(Self { node: NodeId::new(0, *b"local"), id: ActorId::new(id) })
  }
}

impl AbstractActor for InertActor {
  fn node(&self) -> &NodeId {
    &self.node
  }

  fn id(&self) -> ActorId {
    self.id
  }

  fn enqueue(&self, record: MailboxRecord, _ctx: Option<&dyn ExecutionUnit>) {
    drop(record);
  }

  fn as_any(&self) -> &(dyn Any + Send + Sync) {
    self
  }
}

#[test]
fn add_is_idempotent_per_actor() {
  let links = LinkSet::new();
  let actor = InertActor::spawn(1);
  assert!(links.add(&actor));
  assert!(!links.add(&actor));
  assert_eq!(links.len(), 1);

  let other = InertActor::spawn(2);
  assert!(links.add(&other));
  assert_eq!(links.len(), 2);
}

#[test]
fn remove_reports_membership_changes() {
  let links = LinkSet::new();
  let actor = InertActor::spawn(1);
  assert!(!links.remove(&actor));
  links.add(&actor);
  assert!(links.remove(&actor));
  assert!(links.is_empty());
}

#[test]
fn remove_weak_resolves_the_source_address() {
  let links = LinkSet::new();
  let actor = InertActor::spawn(1);
  links.add(&actor);

  let address = actor.downgrade();
  assert!(links.remove_weak(&address));
  assert!(!links.remove_weak(&address));
}

#[test]
fn snapshot_prunes_dropped_actors() {
  let links = LinkSet::new();
  let keep = InertActor::spawn(1);
  links.add(&keep);
  {
    let transient = InertActor::spawn(2);
    links.add(&transient);
    assert_eq!(links.len(), 2);
  }

  let live = links.snapshot();
  assert_eq!(live.len(), 1);
  assert!(live[0].ptr_eq(&keep));
  assert_eq!(links.len(), 1);
}
