//! Memory allocator configuration.
//!
//! Uses the mimalloc allocator, which handles the many short-lived buffer
//! allocations of per-request cipher work better than the system
//! allocator.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
