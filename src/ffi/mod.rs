//! C-compatible FFI bindings.

pub mod c_api;
