use alloc::{sync::Arc, vec::Vec};
use core::any::Any;

use proxima_actor_core_rs::{
  AbstractActor, ActorId, ActorSystem, ActorSystemConfig, DeadLetterReason, EventStreamEvent, EventStreamSubscriber,
  ExecutionUnit, ExitMsg, ExitReason, LogLevel, MailboxRecord, Message, MessageId, NodeId, StrongActorRef,
  bincode_codec,
};
use serde::{Deserialize, Serialize};
use spin::Mutex;

use super::BaspProxy;
use crate::{
  basp::{MessageKind, WireHeader, WireRecord},
  codec::PayloadFrame,
  envelope::{DeleteNotice, ForwardEnvelope, LinkNotice, LinkOp},
};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Ping {
  seq: u64,
}

struct LocalOnly;

struct CollectingBroker {
  node:    NodeId,
  id:      ActorId,
  records: Mutex<Vec<MailboxRecord>>,
}

impl CollectingBroker {
  fn spawn(system: &ActorSystem) -> StrongActorRef {
    StrongActorRef::new(Self {
      node:    system.node_id().clone(),
      id:      system.allocate_actor_id(),
      records: Mutex::new(Vec::new()),
    })
  }

  fn records(handle: &StrongActorRef) -> Vec<MailboxRecord> {
    handle.downcast_ref::<CollectingBroker>().expect("collecting broker").records.lock().clone()
  }
}

impl AbstractActor for CollectingBroker {
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

#[derive(Default)]
struct StreamRecorder {
  logs:         Mutex<Vec<LogLevel>>,
  dead_letters: Mutex<Vec<DeadLetterReason>>,
}

impl EventStreamSubscriber for StreamRecorder {
  fn on_event(&self, event: &EventStreamEvent) {
    match event {
      | EventStreamEvent::Log(log) => self.logs.lock().push(log.level()),
      | EventStreamEvent::DeadLetter(entry) => self.dead_letters.lock().push(entry.reason()),
      | EventStreamEvent::RemoteLifecycle(_) => {},
    }
  }
}

struct Fixture {
  system: ActorSystem,
  broker: StrongActorRef,
  mars:   NodeId,
}

impl Fixture {
  fn new() -> Self {
    let system = ActorSystem::new(ActorSystemConfig::new(NodeId::new(0, *b"00000000000000000000")));
    let broker = CollectingBroker::spawn(&system);
    Self { system, broker, mars: NodeId::new(1, *b"11111111111111111111") }
  }

  fn proxy(&self) -> StrongActorRef {
    BaspProxy::install(self.system.clone(), self.mars.clone(), ActorId::new(1), Some(self.broker.clone()))
  }

  fn run(&self) {
    self.system.scheduler().run();
  }
}

#[test]
fn forwarding_serializes_into_one_wire_record() {
  let fx = Fixture::new();
  let proxy = fx.proxy();

  proxy.enqueue(MailboxRecord::new(None, MessageId::of(7), Vec::new(), Message::new(Ping { seq: 3 })), None);
  fx.run();

  let records = CollectingBroker::records(&fx.broker);
  assert_eq!(records.len(), 1);
  let wire = records[0].content().downcast_ref::<WireRecord>().expect("wire record");
  let header = wire.header();
  assert_eq!(header.kind(), MessageKind::DispatchMessage);
  assert_eq!(header.source_node(), fx.system.node_id());
  assert_eq!(header.dest_node(), &fx.mars);
  assert!(header.source_actor_id().is_absent());
  assert_eq!(header.dest_actor_id(), ActorId::new(1));
  assert_eq!(header.operation_id(), 7);
  assert_eq!(header.payload_len() as usize, wire.payload().len());

  let frame: PayloadFrame = bincode_codec::decode(wire.payload()).expect("payload frame");
  assert!(frame.stages().is_empty());
  assert!(frame.manifest().contains("Ping"));
  let ping: Ping = bincode_codec::decode(frame.content()).expect("ping content");
  assert_eq!(ping, Ping { seq: 3 });

  // The proxy itself signs the outbound record.
  let sender = records[0].sender().expect("outbound sender");
  assert!(sender.ptr_eq(&proxy));
}

#[test]
fn sender_identity_fills_the_header() {
  let fx = Fixture::new();
  let proxy = fx.proxy();
  let sender = CollectingBroker::spawn(&fx.system);

  proxy.enqueue(
    MailboxRecord::new(Some(sender.clone()), MessageId::of(9), Vec::new(), Message::new(Ping { seq: 1 })),
    None,
  );
  fx.run();

  let records = CollectingBroker::records(&fx.broker);
  let wire = records[0].content().downcast_ref::<WireRecord>().expect("wire record");
  assert_eq!(wire.header().source_node(), fx.system.node_id());
  assert_eq!(wire.header().source_actor_id(), sender.id());
}

#[test]
fn pre_serialized_records_pass_through_untouched() {
  let fx = Fixture::new();
  let proxy = fx.proxy();
  let header = WireHeader::new(
    MessageKind::KillProxy,
    fx.system.node_id().clone(),
    fx.mars.clone(),
    ActorId::ABSENT,
    ActorId::new(1),
    0,
    0,
  );
  let prebuilt = WireRecord::new(header.clone(), Vec::new());

  proxy.enqueue(MailboxRecord::new(None, MessageId::of(4), Vec::new(), Message::new(prebuilt)), None);
  fx.run();

  let records = CollectingBroker::records(&fx.broker);
  assert_eq!(records.len(), 1);
  let wire = records[0].content().downcast_ref::<WireRecord>().expect("wire record");
  assert_eq!(wire.header(), &header);
  assert_eq!(records[0].message_id(), MessageId::of(4));
}

#[test]
fn serialization_failure_drops_the_record_and_keeps_the_proxy() {
  let fx = Fixture::new();
  let recorder = Arc::new(StreamRecorder::default());
  fx.system.event_stream().subscribe(recorder.clone());
  let proxy = fx.proxy();

  proxy.enqueue(MailboxRecord::of(Message::opaque(LocalOnly)), None);
  proxy.enqueue(MailboxRecord::of(Message::new(Ping { seq: 8 })), None);
  fx.run();

  let records = CollectingBroker::records(&fx.broker);
  assert_eq!(records.len(), 1);
  let wire = records[0].content().downcast_ref::<WireRecord>().expect("wire record");
  let frame: PayloadFrame = bincode_codec::decode(wire.payload()).expect("payload frame");
  assert!(frame.manifest().contains("Ping"));
  assert_eq!(recorder.logs.lock().as_slice(), &[LogLevel::Warn]);

  let concrete = proxy.downcast_ref::<BaspProxy>().expect("basp proxy");
  assert!(concrete.broker().is_some());
}

#[test]
fn idle_proxies_schedule_exactly_once() {
  let fx = Fixture::new();
  let proxy = fx.proxy();

  proxy.enqueue(MailboxRecord::of(Message::new(Ping { seq: 1 })), None);
  proxy.enqueue(MailboxRecord::of(Message::new(Ping { seq: 2 })), None);
  assert_eq!(fx.system.scheduler().pending(), 1);

  fx.run();
  assert_eq!(CollectingBroker::records(&fx.broker).len(), 2);
}

#[test]
fn kill_proxy_swaps_the_broker_and_bounces_requests() {
  let fx = Fixture::new();
  let recorder = Arc::new(StreamRecorder::default());
  fx.system.event_stream().subscribe(recorder.clone());
  let proxy = fx.proxy();
  let requester = CollectingBroker::spawn(&fx.system);

  // A pending synchronous request is drained and bounced by the cleanup.
  proxy.enqueue(
    MailboxRecord::new(Some(requester.clone()), MessageId::request(11), Vec::new(), Message::new(Ping { seq: 1 })),
    None,
  );
  proxy.kill_proxy(None, ExitReason::RemoteLinkUnreachable);

  let concrete = proxy.downcast_ref::<BaspProxy>().expect("basp proxy");
  assert!(concrete.broker().is_none());
  assert_eq!(concrete.exit_reason(), ExitReason::RemoteLinkUnreachable);

  let bounced = CollectingBroker::records(&requester);
  assert_eq!(bounced.len(), 1);
  let reply = bounced[0].content().downcast_ref::<proxima_actor_core_rs::BouncedRequest>().expect("bounce");
  assert_eq!(reply.message_id(), MessageId::request(11));
  assert_eq!(reply.reason(), ExitReason::RemoteLinkUnreachable);

  // Sends after the kill: requests bounce, plain messages turn into dead
  // letters, the broker sees nothing.
  proxy.enqueue(
    MailboxRecord::new(Some(requester.clone()), MessageId::request(12), Vec::new(), Message::new(Ping { seq: 2 })),
    None,
  );
  proxy.enqueue(MailboxRecord::of(Message::new(Ping { seq: 3 })), None);

  assert_eq!(CollectingBroker::records(&requester).len(), 2);
  assert_eq!(recorder.dead_letters.lock().as_slice(), &[DeadLetterReason::QueueClosed]);
  assert!(CollectingBroker::records(&fx.broker).is_empty());

  // The drained scheduler entry finds a closed mailbox and finishes.
  fx.run();
  assert!(CollectingBroker::records(&fx.broker).is_empty());
}

#[test]
fn proxies_without_a_broker_finish_quietly() {
  let fx = Fixture::new();
  let proxy = BaspProxy::install(fx.system.clone(), fx.mars.clone(), ActorId::new(1), None);

  proxy.enqueue(MailboxRecord::of(Message::new(Ping { seq: 1 })), None);
  fx.run();

  assert!(CollectingBroker::records(&fx.broker).is_empty());
  let concrete = proxy.downcast_ref::<BaspProxy>().expect("basp proxy");
  assert!(concrete.broker().is_none());
}

#[test]
fn assign_broker_rewires_a_claimed_proxy() {
  let fx = Fixture::new();
  let proxy = BaspProxy::install(fx.system.clone(), fx.mars.clone(), ActorId::new(1), None);
  let concrete = proxy.downcast_ref::<BaspProxy>().expect("basp proxy");

  concrete.assign_broker(fx.broker.clone());
  proxy.enqueue(MailboxRecord::of(Message::new(Ping { seq: 5 })), None);
  fx.run();

  assert_eq!(CollectingBroker::records(&fx.broker).len(), 1);

  // Killed proxies refuse a new broker.
  proxy.kill_proxy(None, ExitReason::RemoteLinkUnreachable);
  concrete.assign_broker(fx.broker.clone());
  assert!(concrete.broker().is_none());
}

#[test]
fn the_destructor_leaves_a_delete_notice() {
  let fx = Fixture::new();
  let proxy = fx.proxy();
  drop(proxy);

  let records = CollectingBroker::records(&fx.broker);
  assert_eq!(records.len(), 1);
  let notice = records[0].content().downcast_ref::<DeleteNotice>().expect("delete notice");
  assert_eq!(notice.node(), &fx.mars);
  assert_eq!(notice.actor_id(), ActorId::new(1));
}

#[test]
fn killed_proxies_leave_no_delete_notice() {
  let fx = Fixture::new();
  let proxy = fx.proxy();
  proxy.kill_proxy(None, ExitReason::RemoteLinkUnreachable);
  drop(proxy);

  assert!(CollectingBroker::records(&fx.broker).is_empty());
}

#[test]
fn backlinks_forward_link_notices_through_the_broker() {
  let fx = Fixture::new();
  let proxy = fx.proxy();
  let peer = CollectingBroker::spawn(&fx.system);

  assert!(proxy.add_backlink(&peer));
  assert!(!proxy.add_backlink(&peer));

  let records = CollectingBroker::records(&fx.broker);
  assert_eq!(records.len(), 1);
  let envelope = records[0].content().downcast_ref::<ForwardEnvelope>().expect("forward envelope");
  assert!(envelope.proxy().ptr_eq(&proxy));
  let notice = envelope.content().downcast_ref::<LinkNotice>().expect("link notice");
  assert_eq!(notice.op(), LinkOp::Link);
  assert!(notice.target().ptr_eq(&peer));

  assert!(proxy.remove_backlink(&peer));
  assert!(!proxy.remove_backlink(&peer));
  let records = CollectingBroker::records(&fx.broker);
  assert_eq!(records.len(), 2);
  let envelope = records[1].content().downcast_ref::<ForwardEnvelope>().expect("forward envelope");
  let notice = envelope.content().downcast_ref::<LinkNotice>().expect("link notice");
  assert_eq!(notice.op(), LinkOp::Unlink);
}

#[test]
fn exit_notifications_detach_the_local_link_first() {
  let fx = Fixture::new();
  let proxy = fx.proxy();
  let peer = CollectingBroker::spawn(&fx.system);
  let concrete = proxy.downcast_ref::<BaspProxy>().expect("basp proxy");

  assert!(proxy.add_backlink(&peer));
  concrete.forward_msg(
    Some(peer.clone()),
    MessageId::of(0),
    Message::opaque(ExitMsg::new(peer.downgrade(), ExitReason::Normal)),
    None,
  );

  // The link is gone locally, so a later unlink has nothing to remove.
  assert!(!proxy.remove_backlink(&peer));
  assert_eq!(CollectingBroker::records(&fx.broker).len(), 2);
}
