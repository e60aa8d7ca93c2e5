/// A literal argument value as written in the query document.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<ArgumentValue>),
    Object(Vec<(String, ArgumentValue)>),
    Variable(String),
}

impl ArgumentValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgumentValue::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        ArgumentValue::Int(value)
    }
}

impl From<i32> for ArgumentValue {
    fn from(value: i32) -> Self {
        ArgumentValue::Int(value.into())
    }
}

impl From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        ArgumentValue::Float(value)
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        ArgumentValue::Boolean(value)
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::String(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        ArgumentValue::String(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    name: String,
    value: ArgumentValue,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }
}

/// Multiplier derived from the literal arguments of a field.
///
/// A field without arguments weighs 1. Otherwise the integer arguments are
/// summed: `first: 10` approximates ten downstream evaluations. Every other
/// literal kind adds nothing, so a field whose arguments are all
/// non-integers weighs 0. Negative integers take part in the sum, but the
/// total never goes below 0.
pub fn argument_weight(arguments: &[Argument]) -> u64 {
    if arguments.is_empty() {
        return 1;
    }

    let total = arguments
        .iter()
        .filter_map(|argument| argument.value.as_int())
        .map(i128::from)
        .fold(0, i128::saturating_add);

    u64::try_from(total.max(0)).unwrap_or(u64::MAX)
}
