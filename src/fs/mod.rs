//! Filesystem utilities for git-share.

pub mod atomic;

pub use atomic::atomic_write_file;
