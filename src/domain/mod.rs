// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure value objects with no dependencies beyond `std`.
//!
//! - [`diagnostics`]: [`BufferCapacity`](diagnostics::BufferCapacity)
//! - [`toast`]: [`VisibleLimit`](toast::VisibleLimit),
//!   [`DisplaySecs`](toast::DisplaySecs)

pub mod diagnostics;
pub mod toast;
