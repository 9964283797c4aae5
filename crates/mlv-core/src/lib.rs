//! # mlv-core
//!
//! Core data model shared by every mlv crate.
//!
//! This crate provides:
//! - [`value::TypedValue`], the captured execution value as a single-discriminant sum type
//! - Parameter declarations and bindings from the pipeline spec
//! - Executions and pipeline tasks as delivered by the metadata store
//! - Model-registry records and search criteria
//! - [`display::DisplayValue`], the render contract handed to presentation layers
//! - Cross-cutting error types

pub mod display;
pub mod errors;
pub mod parameter;
pub mod pipeline;
pub mod registry;
pub mod value;

pub use display::DisplayValue;
pub use errors::CoreError;
pub use parameter::{ParameterBinding, ParameterType};
pub use pipeline::{Artifact, ArtifactBinding, Execution, PipelineTask, TaskIo};
pub use registry::{ModelVersion, ModelVersionState, SearchCriterion, SearchType};
pub use value::{TypedValue, normalize_numbers};
