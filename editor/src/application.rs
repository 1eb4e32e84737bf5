use crate::dispatcher::Dispatcher;
use crate::messages::prelude::*;

use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use spin::{Mutex, MutexGuard};
use std::cell::Cell;

pub struct Editor {
	pub dispatcher: Dispatcher,
}

impl Editor {
	/// Construct the editor.
	/// Remember to provide a random seed with `application::set_uuid_seed(seed)` before any editors can be used.
	pub fn new() -> Self {
		Self { dispatcher: Dispatcher::new() }
	}

	pub fn handle_message<T: Into<Message>>(&mut self, message: T) -> Vec<FrontendMessage> {
		self.dispatcher.handle_message(message, true);

		std::mem::take(&mut self.dispatcher.responses)
	}
}

impl Default for Editor {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(not(test))]
static RNG: Mutex<Option<ChaCha20Rng>> = Mutex::new(None);

thread_local! {
	pub static UUID_SEED: Cell<Option<u64>> = const { Cell::new(None) };
	#[cfg(test)]
	static LOCAL_RNG: Mutex<Option<ChaCha20Rng>> = const { Mutex::new(None) };
}

pub fn set_uuid_seed(random_seed: u64) {
	UUID_SEED.with(|seed| seed.set(Some(random_seed)));
}

pub fn generate_uuid() -> u64 {
	let init = |mut lock: MutexGuard<Option<ChaCha20Rng>>| {
		if lock.is_none() {
			UUID_SEED.with(|seed| {
				let random_seed = seed.get().expect("random seed not set before editor was initialized");
				*lock = Some(ChaCha20Rng::seed_from_u64(random_seed));
			})
		}
		lock.as_mut().map(ChaCha20Rng::next_u64).unwrap()
	};
	(
		#[cfg(test)]
		LOCAL_RNG.with(|rng| init(rng.lock())),
		#[cfg(not(test))]
		init(RNG.lock()),
	)
		.0
}
