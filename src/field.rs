use crate::Error;
use std::str::FromStr;

/// Identifies one field of the serialized snapshot record.
///
/// Exists for client environments that cannot drive a reflective
/// deserializer and instead dispatch on incoming field names explicitly.
/// Peers with structured deserialization support decode
/// [`ExceptionInfo`](crate::ExceptionInfo) directly and never touch this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionInfoField {
    /// `i18nKey` — localization key for the user-facing message.
    I18nKey,
    /// `exceptionMessage` — raw message text.
    ExceptionMessage,
    /// `messageParameters` — positional template substitution values.
    MessageParameters,
    /// `exceptionClass` — name of the originating error's type.
    ExceptionClass,
    /// `stackTrace` — rendered call stack lines.
    StackTrace,
    /// `exceptionCause` — nested snapshot of the underlying cause.
    ExceptionCause,
}

impl ExceptionInfoField {
    /// All fields, in the order they appear in the serialized record.
    pub const ALL: [ExceptionInfoField; 6] = [
        ExceptionInfoField::I18nKey,
        ExceptionInfoField::ExceptionMessage,
        ExceptionInfoField::MessageParameters,
        ExceptionInfoField::ExceptionClass,
        ExceptionInfoField::StackTrace,
        ExceptionInfoField::ExceptionCause,
    ];

    /// Name of the field in the serialized record.
    pub fn wire_name(self) -> &'static str {
        match self {
            ExceptionInfoField::I18nKey => "i18nKey",
            ExceptionInfoField::ExceptionMessage => "exceptionMessage",
            ExceptionInfoField::MessageParameters => "messageParameters",
            ExceptionInfoField::ExceptionClass => "exceptionClass",
            ExceptionInfoField::StackTrace => "stackTrace",
            ExceptionInfoField::ExceptionCause => "exceptionCause",
        }
    }
}

impl FromStr for ExceptionInfoField {
    type Err = Error;

    /// Resolves a wire field name, failing with [`Error::InvalidField`]
    /// for names outside the record.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| Error::InvalidField(s.to_string()))
    }
}
