use crate::{convert::capture_stack_trace, Error};
use serde::{Deserialize, Serialize};
use std::{any, error::Error as StdError, fmt, iter};

/// A snapshot of a server-side error in a form that survives serialization
/// across a tier boundary.
///
/// Instances are created at the moment an error is caught at a service
/// boundary (see [`ExceptionInfo::from_error`]) and treated as read-only
/// afterwards; serialization machinery replaces whole fields, never parts
/// of them. Each snapshot exclusively owns its direct cause, so the cause
/// chain is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionInfo {
    /// Key the client resolves to a user-facing message template. Empty
    /// when the error carries no localized message.
    #[serde(default)]
    pub i18n_key: String,

    /// Raw message text of the originating error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_message: Option<String>,

    /// Positional substitution values for the message template, in
    /// placeholder order.
    #[serde(default)]
    pub message_parameters: Vec<String>,

    /// Name of the originating error's type. Diagnostic display only;
    /// nothing dispatches on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_class: Option<String>,

    /// Rendered call stack, one line per frame, innermost frame first.
    #[serde(default)]
    pub stack_trace: Vec<String>,

    /// The underlying cause, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_cause: Option<Box<ExceptionInfo>>,
}

impl ExceptionInfo {
    /// Creates a snapshot from the given fields, as-is.
    ///
    /// No validation is performed; the fields are also public, so struct
    /// literal construction works just as well.
    pub fn new(
        i18n_key: impl Into<String>,
        exception_message: Option<String>,
        message_parameters: Vec<String>,
        exception_class: Option<String>,
        stack_trace: Vec<String>,
        exception_cause: Option<ExceptionInfo>,
    ) -> Self {
        ExceptionInfo {
            i18n_key: i18n_key.into(),
            exception_message,
            message_parameters,
            exception_class,
            stack_trace,
            exception_cause: exception_cause.map(Box::new),
        }
    }

    /// Snapshots a live error together with the call stack of the current
    /// thread.
    ///
    /// The error's sources become nested snapshots with an empty
    /// localization key and no message parameters of their own. Source
    /// levels carry no type name (the concrete type is erased behind
    /// `dyn Error`) and no stack of their own.
    pub fn from_error<E, K, P>(error: &E, i18n_key: K, message_parameters: P) -> Self
    where
        E: StdError,
        K: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        ExceptionInfo {
            i18n_key: i18n_key.into(),
            exception_message: Some(error.to_string()),
            message_parameters: message_parameters.into_iter().map(Into::into).collect(),
            exception_class: Some(any::type_name::<E>().to_string()),
            stack_trace: capture_stack_trace(),
            exception_cause: error.source().map(|source| Box::new(Self::from_source(source))),
        }
    }

    fn from_source(error: &(dyn StdError + 'static)) -> ExceptionInfo {
        ExceptionInfo {
            exception_message: Some(error.to_string()),
            exception_cause: error.source().map(|source| Box::new(Self::from_source(source))),
            ..ExceptionInfo::default()
        }
    }

    /// Iterates over this snapshot and its transitive causes, outermost
    /// first.
    pub fn chain(&self) -> impl Iterator<Item = &ExceptionInfo> + '_ {
        iter::successors(Some(self), |info| info.exception_cause.as_deref())
    }

    /// Serializes the snapshot to its JSON wire form.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::SerializeSnapshot)
    }

    /// Parses a snapshot from its JSON wire form.
    ///
    /// Array fields missing from the document come back as empty
    /// sequences.
    pub fn from_json(json: &str) -> Result<ExceptionInfo, Error> {
        serde_json::from_str(json).map_err(Error::DeserializeSnapshot)
    }
}

impl fmt::Display for ExceptionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, info) in self.chain().enumerate() {
            if depth > 0 {
                write!(f, "\nCaused by: ")?;
            }
            match (&info.exception_class, &info.exception_message) {
                (Some(class), Some(message)) => write!(f, "{}: {}", class, message)?,
                (Some(class), None) => f.write_str(class)?,
                (None, Some(message)) => f.write_str(message)?,
                (None, None) => f.write_str("<unknown error>")?,
            }
            for line in &info.stack_trace {
                write!(f, "\n    at {}", line)?;
            }
        }
        Ok(())
    }
}
