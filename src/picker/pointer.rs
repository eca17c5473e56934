//! Process-wide pointer-press routing for outside-click dismissal.
//!
//! An open picker holds a subscription; closing or unmounting it releases the
//! subscription. The host feeds every press through [`PointerRouter::press`]
//! and dismisses the subscribers whose rendered boundary missed the press.

use indexmap::IndexMap;
use ratatui::layout::{Position, Rect};

/// Handle returned by [`PointerRouter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
pub struct PointerRouter {
	next_id: u64,
	subscribers: IndexMap<SubscriptionId, Vec<Rect>>,
}

impl PointerRouter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a new listener with an empty boundary.
	pub fn subscribe(&mut self) -> SubscriptionId {
		let id = SubscriptionId(self.next_id);
		self.next_id += 1;
		self.subscribers.insert(id, Vec::new());
		log::debug!("pointer subscription {id:?} added");
		id
	}

	/// Remove a listener. Returns `false` when it was not registered.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let removed = self.subscribers.shift_remove(&id).is_some();
		if removed {
			log::debug!("pointer subscription {id:?} removed");
		}
		removed
	}

	#[must_use]
	pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
		self.subscribers.contains_key(&id)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.subscribers.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.subscribers.is_empty()
	}

	/// Replace the regions a listener last rendered into.
	pub fn set_boundary(&mut self, id: SubscriptionId, regions: Vec<Rect>) {
		if let Some(boundary) = self.subscribers.get_mut(&id) {
			*boundary = regions;
		}
	}

	/// Whether a press at `position` lands outside a subscribed listener.
	#[must_use]
	pub fn is_outside(&self, id: SubscriptionId, position: Position) -> bool {
		self.subscribers
			.get(&id)
			.is_some_and(|boundary| !boundary.iter().any(|rect| rect.contains(position)))
	}

	/// Listeners, in subscription order, whose boundary does not contain
	/// `position`.
	#[must_use]
	pub fn press(&self, position: Position) -> Vec<SubscriptionId> {
		self.subscribers
			.keys()
			.copied()
			.filter(|id| self.is_outside(*id, position))
			.collect()
	}
}
