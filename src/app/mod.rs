//! Alignment core and the viewer's application layer.
//!
//! [`allocator`] and [`aligner`] are pure functions over column texts;
//! [`service::AlignmentService`] drives them against a [`ports::TableAccess`]
//! implementation and keeps resize registrations.

pub mod action;
pub mod aligner;
pub mod allocator;
pub mod anchor;
pub mod effect;
pub mod effect_runner;
pub mod error;
pub mod ports;
pub mod reducer;
pub mod resize;
pub mod service;
pub mod state;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use aligner::align_column;
pub use allocator::allocate_column_widths;
pub use error::AlignError;
pub use resize::{ResizeRegistry, ResizeSubscription};
pub use service::{AlignmentService, AppliedAlignment, TablePass, clear_alignment};
