use crate::types::StubKind;

pub const LOG_TARGET: &str = "callstub";
pub const ANONYMOUS: &str = "anonymous";

pub(crate) fn call_recorded(name: Option<&str>, kind: StubKind, index: usize) {
    tracing::trace!(
        target: LOG_TARGET,
        stub = name.unwrap_or(ANONYMOUS),
        kind = kind.as_str(),
        call = index,
        "call recorded"
    );
}

pub(crate) fn behavior_queued(name: Option<&str>, behavior: &'static str, pending: usize) {
    tracing::trace!(
        target: LOG_TARGET,
        stub = name.unwrap_or(ANONYMOUS),
        kind = StubKind::Deferred.as_str(),
        behavior,
        pending,
        "behavior queued"
    );
}

pub fn structured_label(name: Option<&str>, kind: StubKind) -> String {
    format!(
        "stub={} kind={}",
        name.unwrap_or(ANONYMOUS).replace(char::is_whitespace, "_"),
        kind.as_str()
    )
}
