// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outbound call interception
//!
//! Classifies calls, dispatches the host extension points and logs the
//! monitored ones.

mod classifier;
mod event;
mod hooks;
mod logger;

pub use classifier::{is_monitored, RequestClassifier};
pub use event::{Outcome, Preempt, TransportError};
pub use hooks::{HookChain, HttpHooks};
pub use logger::{ApiLogger, REQUEST_LABEL, RESPONSE_LABEL};
