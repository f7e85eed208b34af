//! Request middleware helpers.

pub mod rbac;
