// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Asynchronous texture readbacks
//!
//! Completions are delivered from the worker thread through
//! `Invoke_Render_Texture_ReadbackComplete`, the same path a real render
//! thread takes.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, unbounded};
use interop_abi::HandleFFI;
use interop_bridge::import::ffi::Invoke_Render_Texture_ReadbackComplete;
use tracing::{debug, trace};

pub(crate) enum Job {
	Readback {
		texture: HandleFFI,
		request: u64,
		pixels: Vec<u8>,
	},
	Stop,
}

/// Background thread completing readbacks queued by attached textures
///
/// Dropping the worker stops and joins the thread after the jobs already
/// queued have been delivered.
pub struct ReadbackWorker {
	sender: Sender<Job>,
	thread: Option<JoinHandle<()>>,
}

impl ReadbackWorker {
	pub fn spawn() -> Self {
		let (sender, receiver) = unbounded();
		let thread = thread::Builder::new()
			.name("mock-readback".to_string())
			.spawn(move || run(receiver))
			.expect("failed to spawn readback worker");
		Self {
			sender,
			thread: Some(thread),
		}
	}

	pub(crate) fn sender(&self) -> Sender<Job> {
		self.sender.clone()
	}
}

impl Drop for ReadbackWorker {
	fn drop(&mut self) {
		let _ = self.sender.send(Job::Stop);
		if let Some(thread) = self.thread.take() {
			let _ = thread.join();
		}
	}
}

fn run(receiver: Receiver<Job>) {
	debug!("readback worker started");
	for job in receiver {
		match job {
			Job::Readback {
				texture,
				request,
				pixels,
			} => {
				trace!(?texture, request, len = pixels.len(), "readback complete");
				Invoke_Render_Texture_ReadbackComplete(texture, request, pixels.as_ptr(), pixels.len());
			}
			Job::Stop => break,
		}
	}
	debug!("readback worker stopped");
}
