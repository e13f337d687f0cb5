/// All errors that can be produced while reconstructing a value from its
/// debug representation. Every variant is terminal for the enclosing
/// reconstruction call: the first error propagates up the recursive chain
/// unchanged, and no partial value is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReprError {
    /// Bracket nesting in the input does not balance, or a token that must
    /// be a `name=value` assignment carries no `=`.
    #[error("malformed input: {text}")]
    MalformedInput { text: String },

    /// The primitive builder was asked to parse a value for a descriptor
    /// kind it has no literal rule for (e.g. a mapping keyed by an object).
    #[error("no parse rule for {kind} values")]
    UnsupportedType { kind: String },

    /// A token named a field absent from the target shape's field set.
    #[error("unknown field `{field}` on {class}")]
    UnknownField { class: String, field: String },

    /// The target shape is not constructible — no fresh instance can be
    /// allocated for it.
    #[error("{class} is not constructible")]
    Instantiation { class: String },

    /// The named field exists but its slot is not writable.
    #[error("field `{field}` on {class} is not writable")]
    Write { class: String, field: String },

    /// The text does not match its kind's literal grammar.
    #[error("cannot parse `{text}` as {kind}")]
    Parse { kind: String, text: String },
}
