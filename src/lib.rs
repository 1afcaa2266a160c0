//! Serializable snapshots of server-side errors for cross-tier propagation.
//!
//! When a service boundary catches an error, the native error value cannot
//! travel to a remote client: the client runtime has no way to reconstruct
//! the server's error types. [`ExceptionInfo`] captures the error as plain
//! data instead — a localization key the client resolves to a user-facing
//! message, the raw message text, positional parameters for the message
//! template, the originating type's name, the rendered call stack, and the
//! chain of underlying causes — in a shape any structured serialization
//! format can carry.
//!
//! # Usage
//!
//! Snapshot an error at the boundary where it is caught, before the native
//! value falls out of scope:
//!
//! ```rust
//! use exception_info::ExceptionInfo;
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct QueryFailure;
//!
//! impl fmt::Display for QueryFailure {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("connection reset while reading result set")
//!     }
//! }
//!
//! impl std::error::Error for QueryFailure {}
//!
//! let snapshot = ExceptionInfo::from_error(
//!     &QueryFailure,
//!     "serverError.scheduleUpdateFailed",
//!     ["tenant-7"],
//! );
//! let body = snapshot.to_json().expect("snapshot serializes");
//! # assert!(body.contains("serverError.scheduleUpdateFailed"));
//! ```
//!
//! On the receiving side any `serde` deserializer works. Clients that
//! cannot drive one map incoming field names through
//! [`ExceptionInfoField`] instead:
//!
//! ```rust
//! use exception_info::{ExceptionInfo, ExceptionInfoField};
//!
//! let body = r#"{"i18nKey":"serverError.entityNotFound","messageParameters":["Spot","42"]}"#;
//! let snapshot = ExceptionInfo::from_json(body).expect("well-formed snapshot");
//! assert_eq!("serverError.entityNotFound", snapshot.i18n_key);
//! assert!(snapshot.stack_trace.is_empty());
//!
//! let field: ExceptionInfoField = "messageParameters".parse().expect("known field");
//! assert_eq!(ExceptionInfoField::MessageParameters, field);
//! ```
//!
//! # Wire format
//!
//! A snapshot serializes to a structured record with these field names:
//!
//! | Field                                                      | Wire name           | Wire type               |
//! | ---------------------------------------------------------- | ------------------- | ----------------------- |
//! | [`i18n_key`](ExceptionInfo::i18n_key)                      | `i18nKey`           | string                  |
//! | [`exception_message`](ExceptionInfo::exception_message)    | `exceptionMessage`  | string, optional        |
//! | [`message_parameters`](ExceptionInfo::message_parameters)  | `messageParameters` | array of strings        |
//! | [`exception_class`](ExceptionInfo::exception_class)        | `exceptionClass`    | string, optional        |
//! | [`stack_trace`](ExceptionInfo::stack_trace)                | `stackTrace`        | array of strings        |
//! | [`exception_cause`](ExceptionInfo::exception_cause)        | `exceptionCause`    | nested record, optional |
//!
//! Optional fields are omitted when absent. Array fields missing from an
//! incoming record deserialize as empty sequences, never as null.
//!
//! # Stack capture
//!
//! [`ExceptionInfo::from_error`] records the call stack of the thread
//! taking the snapshot, one line per resolved frame, innermost frame
//! first. Capture is controlled by the `backtrace` cargo feature (enabled
//! by default); without it the snapshot carries an empty stack.
#![doc(html_root_url = "https://docs.rs/exception-info/0.1.0")]
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

mod convert;
mod error;
mod exception_info;
mod field;

pub use error::Error;
pub use exception_info::ExceptionInfo;
pub use field::ExceptionInfoField;
