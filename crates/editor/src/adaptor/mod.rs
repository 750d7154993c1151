//! Execution strategies for content mutation and history.
//!
//! An editor runs under exactly one [`Adaptor`] for its whole lifetime:
//!
//! * [`PlainAdaptor`]: local, synchronous mutation with a linear undo stack.
//! * [`RtcAdaptor`]: mutation and history delegated to a collaboration
//!   engine, with local fallbacks for content formats the engine cannot serve.

mod plain;
mod rtc;

use std::fmt;

pub use plain::PlainAdaptor;
pub use rtc::RtcAdaptor;

/// The strategy installed on an editor.
#[derive(Clone)]
pub enum Adaptor {
	/// Local history and content.
	Plain(PlainAdaptor),
	/// Collaboration engine.
	Collaborative(RtcAdaptor),
}

impl Adaptor {
	/// Returns `true` for the collaborative strategy.
	pub fn is_collaborative(&self) -> bool {
		matches!(self, Adaptor::Collaborative(_))
	}

	/// Returns `true` if a collaboration engine reported remote peers.
	pub fn is_remote(&self) -> bool {
		match self {
			Adaptor::Plain(_) => false,
			Adaptor::Collaborative(rtc) => rtc.is_remote(),
		}
	}
}

impl fmt::Debug for Adaptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Adaptor::Plain(plain) => f.debug_tuple("Plain").field(plain).finish(),
			Adaptor::Collaborative(rtc) => f.debug_tuple("Collaborative").field(rtc).finish(),
		}
	}
}
