//! Query-argument value stringification.
//!
//! The remote APIs are picky about argument rendering: booleans must be
//! lowercase, list-valued filters are joined with `", "`, and an empty list
//! means the argument is omitted entirely rather than sent empty.

/// A query-argument value, already rendered to its wire form.
///
/// `None` means the argument should be omitted from the request (empty
/// collections render to this).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgValue(pub(crate) Option<String>);

impl ArgValue {
    /// Rendered value, or `None` when the argument is to be omitted.
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue(Some(value.to_string()))
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue(Some(value))
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        // "true"/"false", never "True".
        ArgValue(Some(if value { "true" } else { "false" }.to_string()))
    }
}

macro_rules! arg_value_from_display {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ArgValue {
            fn from(value: $ty) -> Self {
                ArgValue(Some(value.to_string()))
            }
        })*
    };
}

arg_value_from_display!(i32, i64, u32, u64, f32, f64);

impl<S: AsRef<str>> From<&[S]> for ArgValue {
    fn from(values: &[S]) -> Self {
        if values.is_empty() {
            return ArgValue(None);
        }
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        ArgValue(Some(joined))
    }
}

impl<S: AsRef<str>> From<&Vec<S>> for ArgValue {
    fn from(values: &Vec<S>) -> Self {
        ArgValue::from(values.as_slice())
    }
}
