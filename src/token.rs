/// A schedulable crontab entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Schedule expression, either five fields (`30 20 * * *`) or an
    /// `@`-shortcut (`@daily`). Treated as an opaque string.
    pub schedule: String,
    /// Command run by cron when the schedule fires.
    pub command: String,
    /// Human-readable label from a `##` comment on the line above,
    /// if there was one.
    pub description: Option<String>,
}

/// An environment assignment (`FOO=bar`), active for every job
/// below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub identifier: String,
    pub value: String,
}

/// A comment line, stored verbatim including the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub value: String,
}

/// A non-blank line that matched no other classification,
/// stored verbatim and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized {
    pub value: String,
}

/// A single crontab line, classified.
///
/// Tokens come out of [`tokenize`](crate::tokenize) in file order,
/// and the order is meaningful: a [`Variable`] only affects the jobs
/// that come after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Job(Job),
    Variable(Variable),
    Comment(Comment),
    Unrecognized(Unrecognized),
}
