// SPDX-License-Identifier: MPL-2.0
//! Event log sizing.
//!
//! [`BufferCapacity`] bounds how many diagnostic events the collector keeps
//! before the oldest ones are evicted.

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
