/// Renders the call stack of the current thread, one line per resolved
/// frame, innermost frame first.
///
/// Frames without debug info degrade to the bare symbol name, or to
/// `<unresolved>` when not even that is available.
#[cfg(feature = "backtrace")]
pub(crate) fn capture_stack_trace() -> Vec<String> {
    let trace = backtrace::Backtrace::new();
    trace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .map(|symbol| {
            format_frame(
                symbol.name().map(|name| name.to_string()),
                symbol
                    .filename()
                    .and_then(|path| path.to_str())
                    .map(str::to_string),
                symbol.lineno(),
            )
        })
        .collect()
}

#[cfg(not(feature = "backtrace"))]
pub(crate) fn capture_stack_trace() -> Vec<String> {
    Vec::new()
}

/// Formats a single stack frame as `name (file:line)`.
#[cfg(feature = "backtrace")]
fn format_frame(name: Option<String>, file: Option<String>, line: Option<u32>) -> String {
    let name = name.unwrap_or_else(|| "<unresolved>".to_string());
    match (file, line) {
        (Some(file), Some(line)) => format!("{} ({}:{})", name, file, line),
        (Some(file), None) => format!("{} ({})", name, file),
        _ => name,
    }
}
