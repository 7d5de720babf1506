use serde::Serialize;

/// Outcome of a read-only lookup.
///
/// A client-class response (404, 403, ...) is an expected answer for reads, so
/// it is reported as `NotFound` together with the status instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Lookup<T> {
    Found(T),
    NotFound { status: u16 },
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound { .. } => None,
        }
    }

    pub fn as_ref(&self) -> Lookup<&T> {
        match self {
            Lookup::Found(value) => Lookup::Found(value),
            Lookup::NotFound { status } => Lookup::NotFound { status: *status },
        }
    }
}

impl<T> From<Lookup<T>> for Option<T> {
    fn from(lookup: Lookup<T>) -> Self {
        lookup.into_option()
    }
}
