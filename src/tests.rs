use core::any::Any;

use spin::Mutex;

use crate::{
  actor_core::{
    AbstractActor, ActorId, ActorSystem, ActorSystemConfig, ExecutionUnit, MailboxRecord, Message, MessageId, NodeId,
    StrongActorRef,
  },
  remote::{BaspProxy, MessageKind, ProxyRegistry, WireRecord, basp_proxy_factory},
};

#[derive(serde::Serialize)]
struct Telemetry {
  reading: u64,
}

struct RecordingBroker {
  node:    NodeId,
  id:      ActorId,
  records: Mutex<Vec<MailboxRecord>>,
}

impl AbstractActor for RecordingBroker {
  fn node(&self) -> &NodeId {
    &self.node
  }

  fn id(&self) -> ActorId {
    self.id
  }

  fn enqueue(&self, record: MailboxRecord, _ctx: Option<&dyn ExecutionUnit>) {
    self.records.lock().push(record);
  }

  fn as_any(&self) -> &(dyn Any + Send + Sync) {
    self
  }
}

#[test]
fn version_is_exposed() {
  assert!(!crate::crate_version().is_empty());
}

#[test]
fn a_claimed_node_forwards_mail_end_to_end() {
  let system = ActorSystem::new(ActorSystemConfig::new(NodeId::new(0, *b"00000000000000000000")));
  let registry = ProxyRegistry::new(system.clone());
  registry.init(basp_proxy_factory());

  let mars = NodeId::new(1, *b"11111111111111111111");
  let broker = StrongActorRef::new(RecordingBroker {
    node:    system.node_id().clone(),
    id:      system.allocate_actor_id(),
    records: Mutex::new(Vec::new()),
  });

  assert!(registry.claim(&mars, broker.clone()).is_empty());
  let proxy = registry.get_or_put(&mars, ActorId::new(1)).expect("factory must produce a proxy");
  assert!(proxy.downcast_ref::<BaspProxy>().expect("basp proxy").broker().is_some());

  proxy.enqueue(
    MailboxRecord::new(None, MessageId::of(21), Vec::new(), Message::new(Telemetry { reading: 99 })),
    None,
  );
  system.scheduler().run();

  let records = broker.downcast_ref::<RecordingBroker>().expect("recording broker").records.lock();
  assert_eq!(records.len(), 1);
  let wire = records[0].content().downcast_ref::<WireRecord>().expect("wire record");
  assert_eq!(wire.header().kind(), MessageKind::DispatchMessage);
  assert_eq!(wire.header().dest_node(), &mars);
  assert_eq!(wire.header().dest_actor_id(), ActorId::new(1));
  assert_eq!(wire.header().operation_id(), 21);
  assert_eq!(wire.header().payload_len() as usize, wire.payload().len());
}
