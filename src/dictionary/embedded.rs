//! Embedded seed lists
//!
//! Seed entries compiled into the binary at build time.

// Include generated seed lists from build script
include!(concat!(env!("OUT_DIR"), "/phrases.rs"));
include!(concat!(env!("OUT_DIR"), "/people.rs"));
include!(concat!(env!("OUT_DIR"), "/places.rs"));
