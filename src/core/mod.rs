//! Core resolution building blocks: the argument store, name and flag
//! resolvers, converters, the single-setting binder, help interception and
//! declaration files. The high-level `api` module composes these.
pub mod convert;
pub mod help;
pub mod params;
pub mod resolve;
pub mod setting;
pub mod store;
