//! Windows `netsh` backend.
//!
//! This module provides the concrete [`ScanSource`](crate::traits::ScanSource)
//! that shells out to `netsh wlan`.
//!
//! Nothing outside this module should reference netsh directly.

pub mod scanner;
