// Mixed primitive values for the quickgen library.
// A palette of "any scalar" generators for fuzzing surfaces that take
// heterogeneous input, folded into one enum since the alternatives
// carry different types.

use crate::combinators::one_of;
use crate::floats::float;
use crate::generator::Generator;
use crate::ints::{boolean, integer};
use crate::strings::{char_any, char_printable, string};

/// One scalar value of any primitive kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Simple {
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
}

/// Any primitive value, printable or not.
pub fn simple_type() -> Generator<Simple> {
    one_of(vec![
        boolean().map(Simple::Bool),
        integer().map(Simple::Int),
        float().map(Simple::Float),
        char_any().map(Simple::Char),
        string(char_any()).map(Simple::String),
    ])
}

/// Any primitive value restricted to printable text content.
pub fn simple_printable() -> Generator<Simple> {
    one_of(vec![
        boolean().map(Simple::Bool),
        integer().map(Simple::Int),
        float().map(Simple::Float),
        char_printable().map(Simple::Char),
        string(char_printable()).map(Simple::String),
    ])
}
