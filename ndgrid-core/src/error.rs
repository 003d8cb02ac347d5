use std::fmt::Display;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Operand shapes differ, or an index vector does not match the dimensionality.
    #[error("shape mismatch in {op}, lhs: {lhs:?}, rhs: {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    #[error("index {index} is out of bound {bound}")]
    InvalidIndex { index: usize, bound: usize },

    /// A buffer length or computed offset does not fit the element count.
    #[error("size {got} does not fit storage of {expected} elements")]
    SizeMismatch { expected: usize, got: usize },

    #[error("slice failed: {0}")]
    SliceError(Box<Error>),

    #[error("{op} is not supported for dtype {dtype}")]
    TypeMismatch {
        op: &'static str,
        dtype: &'static str,
    },

    #[error("last dimensions do not match, lhs: {lhs}, rhs: {rhs}")]
    LastDimensionMismatch { lhs: usize, rhs: usize },

    #[error("{op} is undefined for a zero divisor")]
    Domain { op: &'static str },

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Message: {0}")]
    Msg(String),

    #[error("{inner}\n{backtrace}")]
    WithBacktrace {
        inner: Box<Self>,
        backtrace: Box<std::backtrace::Backtrace>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new error based on a printable error message.
    pub fn msg<M: Display>(msg: M) -> Self {
        Self::Msg(msg.to_string()).bt()
    }

    pub(crate) fn shape_mismatch(op: &'static str, lhs: &[usize], rhs: &[usize]) -> Self {
        Self::ShapeMismatch {
            op,
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
        .bt()
    }

    pub(crate) fn invalid_index(index: usize, bound: usize) -> Self {
        Self::InvalidIndex { index, bound }.bt()
    }

    pub(crate) fn size_mismatch(expected: usize, got: usize) -> Self {
        Self::SizeMismatch { expected, got }.bt()
    }

    /// Wrap a failure surfaced while building a slice.
    pub(crate) fn slice(inner: Self) -> Self {
        Self::SliceError(Box::new(inner.into_inner()))
    }

    pub fn bt(self) -> Self {
        let backtrace = std::backtrace::Backtrace::capture();
        match backtrace.status() {
            std::backtrace::BacktraceStatus::Disabled
            | std::backtrace::BacktraceStatus::Unsupported => self,
            _ => Self::WithBacktrace {
                inner: Box::new(self),
                backtrace: Box::new(backtrace),
            },
        }
    }

    /// The error with any backtrace wrapper removed.
    pub fn inner(&self) -> &Self {
        match self {
            Self::WithBacktrace { inner, .. } => inner.inner(),
            other => other,
        }
    }

    pub fn into_inner(self) -> Self {
        match self {
            Self::WithBacktrace { inner, .. } => inner.into_inner(),
            other => other,
        }
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Msg(format!($msg).into()).bt())
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Msg(format!($err).into()).bt())
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Msg(format!($fmt, $($arg)*).into()).bt())
    };
}
