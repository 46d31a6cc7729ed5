//! Wire format of the explanation service.

mod messages;

pub use messages::{
    explanation_prompt, explanation_schema, parse_explanation, Candidate, Content,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, SchemaError,
    EXPLANATION_FIELDS,
};
