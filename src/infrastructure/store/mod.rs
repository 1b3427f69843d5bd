//! Token storage implementations.
//!
//! Concrete backing for the domain repository trait. The only
//! implementation is an in-process concurrent map; nothing here survives a
//! restart.

mod memory;

pub use memory::MemoryTokenRepository;
