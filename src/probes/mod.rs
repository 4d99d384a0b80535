//! External signal probes: version control and the gateway service.
//!
//! Probes never fail; they degrade to zero-signal results and log why.

pub mod gateway;
pub mod git;
