/// The classified shape of one input line.
///
/// Classification borrows from the trimmed line text, so a `Statement` is
/// cheap to produce and carries the exact fragments the dispatcher acts on:
/// the trimmed left-hand name and the untrimmed right-hand expression for an
/// assignment, the untrimmed callee and the raw argument region for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// The line is empty after trimming; nothing happens.
    Empty,
    /// The line contains exactly one `=` character.
    Assignment {
        /// The whitespace-trimmed text left of the `=`.
        name:       &'a str,
        /// The text right of the `=`, passed to the value parser verbatim.
        expression: &'a str,
    },
    /// The line contains exactly one `(` and exactly one `)`.
    Call {
        /// The text before the `(`, taken literally with no trimming.
        callee:    &'a str,
        /// The text strictly between the `(` and the final character.
        arguments: &'a str,
    },
    /// The line matches no statement shape.
    Unrecognized,
}
