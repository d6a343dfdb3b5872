//! Persistence Adapters - JSON Lines Student Storage
//!
//! `codec` translates students to and from single JSON lines and drives
//! whole-registry passes over line sources and sinks. `JsonlStore`
//! implements the `StudentStore` port on top of a single file.

pub mod codec;
pub mod jsonl_store;

pub use codec::{decode, encode, load_all, save_all};
pub use jsonl_store::JsonlStore;
