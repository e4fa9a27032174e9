//! Embedded dictionaries
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/dict.rs"));
include!(concat!(env!("OUT_DIR"), "/shortdict.rs"));
