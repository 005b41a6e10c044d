//! Mailbox shared by message producers and the lock holder.


use alloc::collections::VecDeque;

use crossbeam_queue::SegQueue;
use spin::Mutex;

use crate::ActorMessage;

/// Multi-producer queue of [`ActorMessage`]s plus a reader buffer.
///
/// Any thread may [`push`](Self::push). Only the thread owning the actor lock moves
/// messages into the reader buffer and consumes them; the buffer's mutex is never
/// contended under that protocol.
pub struct ActorMailbox<A> {
  incoming: SegQueue<ActorMessage<A>>,
  reader:   Mutex<VecDeque<ActorMessage<A>>>,
}

impl<A> ActorMailbox<A> {
  /// Creates an empty mailbox.
  #[must_use]
  pub fn new() -> Self {
    Self { incoming: SegQueue::new(), reader: Mutex::new(VecDeque::new()) }
  }

  /// Appends a message from any thread.
  pub fn push(&self, message: ActorMessage<A>) {
    self.incoming.push(message);
  }

  /// Moves every incoming message into the reader buffer, keeping push order.
  pub fn pop_all(&self) {
    let mut reader = self.reader.lock();
    while let Some(message) = self.incoming.pop() {
      reader.push_back(message);
    }
  }

  /// Takes the next message from the reader buffer.
  #[must_use]
  pub fn read(&self) -> Option<ActorMessage<A>> {
    self.reader.lock().pop_front()
  }

  /// Puts a message back at the front of the reader buffer.
  pub fn delay(&self, message: ActorMessage<A>) {
    self.reader.lock().push_front(message);
  }

  /// Returns the number of queued messages, incoming and buffered.
  #[must_use]
  pub fn len(&self) -> usize {
    self.incoming.len() + self.reader.lock().len()
  }

  /// Returns `true` when no message is queued.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drops every queued message.
  pub fn clear(&self) {
    self.pop_all();
    self.reader.lock().clear();
  }
}

impl<A> Default for ActorMailbox<A> {
  fn default() -> Self {
    Self::new()
  }
}
