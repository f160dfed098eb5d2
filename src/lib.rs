#![doc(test(attr(deny(warnings))))]

//! Goal Ledger offers the savings-goal, transaction, and validation
//! primitives that power goal-tracking workflows: creating goals, applying
//! deposits and withdrawals against them, and querying derived progress.

pub mod errors;
pub mod flow;
pub mod ledger;
pub mod session;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Goal Ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
