//! Outcomes of a single invocation: a produced value or a captured failure.

use std::any::Any;
use std::fmt;

/// What a captured error looked like: its kind and message.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    pub kind: String,
    pub message: String,
}

impl Failure {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Capture an `Err` value. The kind is the unqualified type name of `E`.
    pub fn from_error<E: fmt::Display>(error: &E) -> Self {
        Self::new(short_type_name::<E>(), error.to_string())
    }

    /// Capture a panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::new("panic", message)
    }
}

/// Renders as `Kind("message")`.
impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.message)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Result of invoking the function under test once. Never both a value and a failure.
#[derive(Clone, PartialEq)]
pub enum Outcome<R> {
    Value(R),
    Failure(Failure),
}

impl<R> Outcome<R> {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn value(&self) -> Option<&R> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Value(_) => None,
            Outcome::Failure(f) => Some(f),
        }
    }
}

impl<R, E: fmt::Display> From<Result<R, E>> for Outcome<R> {
    fn from(result: Result<R, E>) -> Self {
        match result {
            Ok(v) => Outcome::Value(v),
            Err(e) => Outcome::Failure(Failure::from_error(&e)),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Outcome<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "{v:?}"),
            Outcome::Failure(failure) => write!(f, "{failure:?}"),
        }
    }
}

/// `my_crate::errors::Bad<u8>` -> `Bad`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Overdrawn;

    impl fmt::Display for Overdrawn {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "balance below zero")
        }
    }

    #[test]
    fn test_failure_from_error_uses_short_type_name() {
        let failure = Failure::from_error(&Overdrawn);
        assert_eq!(failure.kind, "Overdrawn");
        assert_eq!(format!("{failure:?}"), "Overdrawn(\"balance below zero\")");
    }

    #[test]
    fn test_failure_from_panic_payloads() {
        assert_eq!(Failure::from_panic(Box::new("boom")).message, "boom");
        assert_eq!(
            Failure::from_panic(Box::new(String::from("bang"))).message,
            "bang"
        );
        assert_eq!(Failure::from_panic(Box::new(7u8)).kind, "panic");
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: Outcome<i32> = Ok::<_, Overdrawn>(4).into();
        assert_eq!(ok.value(), Some(&4));
        let err: Outcome<i32> = Err::<i32, _>(Overdrawn).into();
        assert!(err.is_failure());
        assert_eq!(format!("{ok:?}"), "4");
    }

    #[test]
    fn test_short_type_name_strips_path_and_generics() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
    }
}
