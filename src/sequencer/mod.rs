//! Animation sequencing module
//!
//! Owns the FIFO queue of pending animation steps and the "what plays
//! next" decision taken on every segment-completion event:
//! - voice still speaking + completed step loops → restart the loop
//! - otherwise → pop the queue
//! - queue empty → fall back to the idle step

mod machine;

pub use machine::Sequencer;
