//! Command implementations for the tokhook CLI

pub mod completions;
pub mod fetch_sdk;
pub mod fix_imports;
pub mod helpers;
pub mod version;
