//! Shared stereo post-processing chain.
//!
//! Every voice routes its buffer through this chain before returning it:
//! auto-pan where the voice is built mono, an optional feedback delay, and
//! the mandatory peak limiter.

pub mod auto_pan;
pub mod delay;
pub mod limiter;
