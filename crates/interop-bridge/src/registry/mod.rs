// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Handle registry
//!
//! Maps opaque handles to native object pointers with a type tag. The registry
//! never owns the objects; it only tracks which of them are visible across the
//! boundary. Slots are generation-tagged so a handle from a freed slot can
//! never resolve to whatever is registered in that slot later.
//!
//! A registry built with a generation floor starts its slots above every
//! generation issued under that floor before, so handles from an earlier
//! registry in the same process stay dead in the next one.

mod handle;

use std::{
	collections::HashMap,
	ffi::c_void,
	ptr::NonNull,
	sync::atomic::{AtomicU32, Ordering},
};

use interop_abi::{HandleFFI, TypeTag};
use parking_lot::RwLock;
use tracing::trace;

use self::handle::{FIRST_GENERATION, pack, unpack};
use crate::error::{BridgeError, Result};

/// A resolved registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
	pub ptr: NonNull<c_void>,
	pub tag: TypeTag,
}

// SAFETY: the registry stores the address as an opaque value and never
// dereferences it. Whoever dereferences a resolved pointer is responsible for
// the object's thread affinity.
unsafe impl Send for Entry {}
unsafe impl Sync for Entry {}

struct Slot {
	/// Generation the next (or current) occupant is issued under
	generation: u32,
	entry: Option<Entry>,
}

struct Slots {
	slots: Vec<Slot>,
	/// Indices of empty, reusable slots; retired slots never appear here
	free: Vec<u32>,
	/// Live handles per `(address, tag)`, oldest first
	by_ptr: HashMap<(usize, TypeTag), Vec<HandleFFI>>,
	live: usize,
	/// Generation new slots start at
	first_generation: u32,
}

impl Slots {
	fn new(first_generation: u32) -> Self {
		Self {
			slots: Vec::new(),
			free: Vec::new(),
			by_ptr: HashMap::new(),
			live: 0,
			first_generation,
		}
	}

	fn occupied(&self, handle: HandleFFI) -> Option<(u32, Entry)> {
		let (index, generation) = unpack(handle)?;
		let slot = self.slots.get(index as usize)?;
		if slot.generation != generation {
			return None;
		}
		slot.entry.map(|entry| (index, entry))
	}

	/// Empty a slot and make sure its current handle can never resolve again
	fn vacate(&mut self, index: u32) -> Option<Entry> {
		let slot = &mut self.slots[index as usize];
		let entry = slot.entry.take()?;
		let handle = pack(index, slot.generation);
		if slot.generation == u32::MAX {
			// Bumping would wrap and re-issue old handle values, so the slot is retired.
			trace!(index, "handle slot retired");
		} else {
			slot.generation += 1;
			self.free.push(index);
		}
		let key = (entry.ptr.as_ptr() as usize, entry.tag);
		if let Some(handles) = self.by_ptr.get_mut(&key) {
			handles.retain(|h| *h != handle);
			if handles.is_empty() {
				self.by_ptr.remove(&key);
			}
		}
		self.live -= 1;
		Some(entry)
	}
}

/// Generation-tagged slot table behind a reader-writer lock
///
/// `resolve` takes the read lock and may run concurrently from any thread;
/// `register` and `free` serialize on the write lock. The generation check
/// happens under the lock, so a resolver racing a free-then-register on the
/// same slot sees either the old entry or "not found", never the new object.
pub struct HandleRegistry {
	inner: RwLock<Slots>,
	capacity: u32,
	floor: Option<&'static AtomicU32>,
}

impl HandleRegistry {
	pub fn new(capacity: u32) -> Self {
		Self {
			inner: RwLock::new(Slots::new(FIRST_GENERATION)),
			capacity,
			floor: None,
		}
	}

	/// Registry whose generations start above everything `floor` has recorded
	///
	/// Every handle this registry issues raises `floor` to its generation.
	pub fn with_generation_floor(capacity: u32, floor: &'static AtomicU32) -> Self {
		let first_generation = floor.load(Ordering::Acquire).saturating_add(1).max(FIRST_GENERATION);
		trace!(first_generation, "handle registry seeded");
		Self {
			inner: RwLock::new(Slots::new(first_generation)),
			capacity,
			floor: Some(floor),
		}
	}

	/// Make a native object addressable
	///
	/// Every call issues a fresh handle, even for an object that is already
	/// live under the same tag. Each handle is freed independently.
	pub fn register(&self, ptr: *mut c_void, tag: TypeTag) -> Result<HandleFFI> {
		let ptr = NonNull::new(ptr).ok_or(BridgeError::NullPointer)?;
		let key = (ptr.as_ptr() as usize, tag);

		let mut inner = self.inner.write();
		let index = match inner.free.pop() {
			Some(index) => index,
			None => {
				if inner.slots.len() >= self.capacity as usize {
					return Err(BridgeError::RegistryExhausted {
						capacity: self.capacity,
					});
				}
				let generation = inner.first_generation;
				inner.slots.push(Slot {
					generation,
					entry: None,
				});
				(inner.slots.len() - 1) as u32
			}
		};

		let slot = &mut inner.slots[index as usize];
		slot.entry = Some(Entry {
			ptr,
			tag,
		});
		let generation = slot.generation;
		let handle = pack(index, generation);
		inner.by_ptr.entry(key).or_default().push(handle);
		inner.live += 1;
		if let Some(floor) = self.floor {
			floor.fetch_max(generation, Ordering::AcqRel);
		}

		trace!(?handle, %tag, "handle registered");
		Ok(handle)
	}

	/// Remove a mapping
	///
	/// Unknown, null and already-freed handles are ignored. Returns whether an
	/// entry was removed.
	pub fn free(&self, handle: HandleFFI) -> bool {
		let mut inner = self.inner.write();
		let Some((index, _)) = inner.occupied(handle) else {
			trace!(?handle, "free of unknown handle ignored");
			return false;
		};
		inner.vacate(index);
		trace!(?handle, "handle freed");
		true
	}

	pub fn resolve(&self, handle: HandleFFI) -> Option<Entry> {
		self.inner.read().occupied(handle).map(|(_, entry)| entry)
	}

	/// Resolve and check the type tag in one step
	pub fn resolve_as(&self, handle: HandleFFI, tag: TypeTag) -> Option<*mut c_void> {
		match self.resolve(handle) {
			Some(entry) if entry.tag == tag => Some(entry.ptr.as_ptr()),
			Some(entry) => {
				trace!(?handle, expected = %tag, actual = %entry.tag, "handle tag mismatch");
				None
			}
			None => None,
		}
	}

	/// Most recent live handle of an object, without registering it
	pub fn lookup(&self, ptr: *mut c_void, tag: TypeTag) -> Option<HandleFFI> {
		self.inner.read().by_ptr.get(&(ptr as usize, tag)).and_then(|handles| handles.last().copied())
	}

	pub fn contains(&self, handle: HandleFFI) -> bool {
		self.resolve(handle).is_some()
	}

	/// Number of live handles
	pub fn len(&self) -> usize {
		self.inner.read().live
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn capacity(&self) -> u32 {
		self.capacity
	}

	/// Free every live handle
	pub fn clear(&self) -> usize {
		let mut inner = self.inner.write();
		let occupied: Vec<u32> = inner
			.slots
			.iter()
			.enumerate()
			.filter(|(_, slot)| slot.entry.is_some())
			.map(|(index, _)| index as u32)
			.collect();
		for index in &occupied {
			inner.vacate(*index);
		}
		occupied.len()
	}
}
