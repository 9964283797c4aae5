//! # mlv-params
//!
//! Turns captured execution values into display-ready values.
//!
//! - [`resolve`]: interpret one captured [`TypedValue`](mlv_core::TypedValue)
//!   against its declared [`ParameterType`](mlv_core::ParameterType)
//! - [`ValueResolver::resolve_params`]: apply the resolver across a task's
//!   parameter bindings with the captured → declared → type-name fallback
//! - [`task_io_view`]: the full input/output view of a pipeline task
//! - [`artifact_details`]: the details view of one recorded artifact
//!
//! Every function here is pure and infallible. Malformed payloads degrade to
//! a fallback value instead of an error.

pub mod artifact;
pub mod error;
pub mod resolve;
pub mod task_io;

pub use artifact::{ArtifactDetailsView, artifact_details, artifact_name};
pub use error::ParseError;
pub use resolve::{DEFAULT_JSON_INDENT, ResolvedParam, ValueResolver, parse_string_payload, resolve};
pub use task_io::{IoKind, IoSection, ResolvedArtifact, TaskIoView, task_io_view};
