//! Proxy actor serializing local mail for a remote peer.

#[cfg(test)]
mod tests;

use alloc::{
  format,
  sync::{Arc, Weak},
  vec::Vec,
};
use core::any::Any;

use proxima_actor_core_rs::{
  AbstractActor, ActorId, ActorSystem, DeadLetterEntry, DeadLetterReason, EventStreamEvent, ExecutionUnit, ExitMsg,
  ExitReason, Inbox, InboxPushOutcome, LinkSet, LogLevel, MailboxRecord, Message, MessageId, NodeId,
  RemoteLifecycleEvent, Resumable, ResumeResult, SerializationError, StrongActorRef, SyncRequestBouncer, TaskOutcome,
};
use spin::{Mutex, RwLock};

use crate::{
  basp::{message_kind::MessageKind, wire_header::WireHeader, wire_record::WireRecord},
  codec,
  envelope::{DeleteNotice, ForwardEnvelope, LinkNotice, LinkOp},
  proxy_registry::ProxyFactory,
};

/// Local stand-in for an actor hosted on a remote node.
///
/// Accepts ordinary mail like any native actor, serializes each record into
/// a framed [`WireRecord`], and enqueues it to the per-node broker. The
/// broker slot is the documented cycle breaker: the broker holds the proxy
/// strongly for delivery, the proxy holds the broker only until
/// [`AbstractActor::kill_proxy`] swaps the slot out.
pub struct BaspProxy {
  system:      ActorSystem,
  node:        NodeId,
  id:          ActorId,
  inbox:       Inbox,
  broker:      RwLock<Option<StrongActorRef>>,
  links:       LinkSet,
  exit_reason: Mutex<ExitReason>,
  self_ref:    Weak<BaspProxy>,
}

impl BaspProxy {
  /// Creates a proxy for `(node, id)` and returns its first handle.
  ///
  /// The proxy stays off the scheduler until its first message arrives, so
  /// dropping the handle of a never-used proxy terminates it silently.
  #[must_use]
  pub fn install(system: ActorSystem, node: NodeId, id: ActorId, broker: Option<StrongActorRef>) -> StrongActorRef {
    let proxy = Arc::new_cyclic(|self_ref| Self {
      system,
      node,
      id,
      inbox: Inbox::new(),
      broker: RwLock::new(broker),
      links: LinkSet::new(),
      exit_reason: Mutex::new(ExitReason::Normal),
      self_ref: self_ref.clone(),
    });
    StrongActorRef::from_arc(proxy)
  }

  /// Returns the broker currently wired to this proxy.
  #[must_use]
  pub fn broker(&self) -> Option<StrongActorRef> {
    self.broker.read().clone()
  }

  /// Rewires the broker after a `claim`; ignored once the proxy was killed.
  pub fn assign_broker(&self, broker: StrongActorRef) {
    let mut slot = self.broker.write();
    if self.inbox.is_closed() {
      return;
    }
    *slot = Some(broker);
  }

  /// Returns the exit reason reported to bounced requests.
  #[must_use]
  pub fn exit_reason(&self) -> ExitReason {
    *self.exit_reason.lock()
  }

  /// Forwards an administrative message through the broker under the shared
  /// slot lock. Exit notifications additionally detach the local link to
  /// their source.
  pub fn forward_msg(
    &self,
    sender: Option<StrongActorRef>,
    message_id: MessageId,
    content: Message,
    stages: Option<&[StrongActorRef]>,
  ) {
    if let Some(exit) = content.downcast_ref::<ExitMsg>() {
      self.links.remove_weak(exit.source());
    }
    let Some(proxy) = self.self_handle() else {
      return;
    };
    let guard = self.broker.read();
    if let Some(broker) = guard.as_ref() {
      let envelope = ForwardEnvelope::new(
        sender,
        stages.map(<[StrongActorRef]>::to_vec).unwrap_or_default(),
        proxy.clone(),
        message_id,
        content,
      );
      broker.enqueue(MailboxRecord::new(Some(proxy), MessageId::of(0), Vec::new(), Message::opaque(envelope)), None);
    }
  }

  fn self_arc(&self) -> Option<Arc<Self>> {
    self.self_ref.upgrade()
  }

  fn self_handle(&self) -> Option<StrongActorRef> {
    let arc: Arc<dyn AbstractActor> = self.self_arc()?;
    Some(StrongActorRef::from_arc(arc))
  }

  fn self_task(&self) -> Option<Arc<dyn Resumable>> {
    let arc: Arc<dyn Resumable> = self.self_arc()?;
    Some(arc)
  }

  fn serialize_record(&self, record: MailboxRecord) -> Result<WireRecord, SerializationError> {
    let (sender, message_id, stages, content) = record.into_parts();
    let (source_node, source_actor_id) = match &sender {
      | Some(sender) => (sender.node().clone(), sender.id()),
      | None => (self.system.node_id().clone(), ActorId::ABSENT),
    };
    let payload = codec::encode_payload(&self.system, &stages, &content)?;
    let header = WireHeader::new(
      MessageKind::DispatchMessage,
      source_node,
      self.node.clone(),
      source_actor_id,
      self.id,
      message_id.integer_value(),
      payload.len() as u32,
    );
    Ok(WireRecord::new(header, payload))
  }

  /// Ships one record to the broker; `Ok(false)` reports a cleared slot.
  fn ship(&self, record: MailboxRecord, ctx: &dyn ExecutionUnit) -> Result<bool, SerializationError> {
    let outbound = if record.content().is::<WireRecord>() {
      let (_, message_id, _, content) = record.into_parts();
      MailboxRecord::new(self.self_handle(), message_id, Vec::new(), content)
    } else {
      let wire = self.serialize_record(record)?;
      MailboxRecord::new(self.self_handle(), MessageId::of(0), Vec::new(), Message::new(wire))
    };
    let guard = self.broker.read();
    let Some(broker) = guard.as_ref() else {
      return Ok(false);
    };
    broker.enqueue(outbound, Some(ctx));
    Ok(true)
  }

  fn cleanup(&self, reason: ExitReason, ctx: Option<&dyn ExecutionUnit>) {
    let _ = ctx;
    *self.exit_reason.lock() = reason;
    let bouncer = SyncRequestBouncer::new(reason);
    for record in self.inbox.close() {
      if record.message_id().is_request() {
        bouncer.apply(&record);
      } else {
        self.drop_record(&record);
      }
    }
    self.links.clear();
    self.system.event_stream().publish(&EventStreamEvent::RemoteLifecycle(RemoteLifecycleEvent::ProxyKilled {
      node: self.node.clone(),
      actor_id: self.id,
      reason,
    }));
  }

  fn drop_record(&self, record: &MailboxRecord) {
    self.system.dead_letter(DeadLetterEntry::new(
      record.sender().map(StrongActorRef::downgrade),
      record.message_id(),
      DeadLetterReason::QueueClosed,
    ));
  }
}

impl AbstractActor for BaspProxy {
  fn node(&self) -> &NodeId {
    &self.node
  }

  fn id(&self) -> ActorId {
    self.id
  }

  fn enqueue(&self, record: MailboxRecord, ctx: Option<&dyn ExecutionUnit>) {
    let sender = record.sender().cloned();
    let message_id = record.message_id();
    match self.inbox.push(record) {
      | InboxPushOutcome::UnblockedReader => {
        if let Some(task) = self.self_task() {
          match ctx {
            | Some(ctx) => ctx.exec_later(task),
            | None => self.system.scheduler().enqueue(task),
          }
        }
      },
      | InboxPushOutcome::Success => {},
      | InboxPushOutcome::Closed => {
        if message_id.is_request() {
          SyncRequestBouncer::new(self.exit_reason()).bounce(sender.as_ref(), message_id);
        } else {
          self.system.dead_letter(DeadLetterEntry::new(
            sender.map(|sender| sender.downgrade()),
            message_id,
            DeadLetterReason::QueueClosed,
          ));
        }
      },
    }
  }

  fn add_backlink(&self, other: &StrongActorRef) -> bool {
    if self.links.add(other) {
      self.forward_msg(
        self.self_handle(),
        MessageId::of(0),
        Message::opaque(LinkNotice::new(LinkOp::Link, other.clone())),
        None,
      );
      return true;
    }
    false
  }

  fn remove_backlink(&self, other: &StrongActorRef) -> bool {
    if self.links.remove(other) {
      self.forward_msg(
        self.self_handle(),
        MessageId::of(0),
        Message::opaque(LinkNotice::new(LinkOp::Unlink, other.clone())),
        None,
      );
      return true;
    }
    false
  }

  fn kill_proxy(&self, ctx: Option<&dyn ExecutionUnit>, reason: ExitReason) {
    {
      // Swapping the slot out breaks the broker/proxy reference cycle; no
      // record can be serialized once the write guard drops.
      let mut slot = self.broker.write();
      let _ = slot.take();
    }
    self.cleanup(reason, ctx);
  }

  fn as_any(&self) -> &(dyn Any + Send + Sync) {
    self
  }
}

impl Resumable for BaspProxy {
  fn resume(&self, ctx: &dyn ExecutionUnit, max_throughput: usize) -> ResumeResult {
    let quantum = self.system.config().quantum();
    let mut handled = 0;
    while handled < max_throughput {
      let budget = quantum.min(max_throughput - handled);
      let mut broker_lost = false;
      let round = self.inbox.new_round(budget, |record| match self.ship(record, ctx) {
        | Ok(true) => TaskOutcome::Resume,
        | Ok(false) => {
          broker_lost = true;
          TaskOutcome::StopAll
        },
        | Err(error) => {
          self.system.log(LogLevel::Warn, format!("dropping outbound record for {}/{}: {error}", self.node, self.id));
          TaskOutcome::StopAll
        },
      });
      handled += round.consumed_items();
      if broker_lost || self.broker.read().is_none() {
        return ResumeResult::Done;
      }
      if round.consumed_items() == 0 && !round.stopped() {
        if self.inbox.try_block() {
          return ResumeResult::AwaitingMessage;
        }
        if self.inbox.is_closed() {
          return ResumeResult::Done;
        }
      }
    }
    if self.inbox.try_block() {
      ResumeResult::AwaitingMessage
    } else {
      ResumeResult::ResumeLater
    }
  }
}

impl Drop for BaspProxy {
  fn drop(&mut self) {
    // Best-effort housekeeping; nothing to say when the broker is gone.
    if let Some(broker) = self.broker.get_mut().take() {
      broker.enqueue(
        MailboxRecord::of(Message::new(DeleteNotice::new(self.node.clone(), self.id))),
        None,
      );
    }
  }
}

/// Returns the production factory minting a [`BaspProxy`] per registry
/// entry.
#[must_use]
pub fn basp_proxy_factory() -> ProxyFactory {
  Arc::new(|system, node, id, parent| Some(BaspProxy::install(system.clone(), node.clone(), id, parent)))
}
