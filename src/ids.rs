//! Process-wide id generators.
//!
//! One counter per entity kind, each starting at 1 and incrementing by 1 on
//! every successful construction. Values are never reused, even after a
//! Choice is removed from its Question. Atomics keep ids unique when
//! entities are constructed from multiple threads (the test harness does
//! exactly that).

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_QUESTION_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_CHOICE_ID: AtomicU64 = AtomicU64::new(1);

/// Take the next Question id. Call only after validation has passed.
pub(crate) fn next_question_id() -> u64 {
    NEXT_QUESTION_ID.fetch_add(1, Ordering::Relaxed)
}

/// Take the next Choice id. Shared across all Questions in the process.
pub(crate) fn next_choice_id() -> u64 {
    NEXT_CHOICE_ID.fetch_add(1, Ordering::Relaxed)
}
