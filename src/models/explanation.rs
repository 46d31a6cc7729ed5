/// Structured explanation of a single idiom, as returned by the explanation
/// service. Every field is non-empty once constructed by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    /// Core meaning of the idiom.
    pub meaning: String,
    /// Historical origin, or why it is phrased this way.
    pub origin: String,
    /// A natural English example sentence.
    pub example: String,
    /// Equivalent Vietnamese proverb or cultural context.
    pub vietnamese_context: String,
}
