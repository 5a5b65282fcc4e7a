//! Recognition is instrumented with `tracing` spans when the `tracing`
//! feature is enabled. When it is not, `span!` expands to a no-op value so
//! the instrumentation costs nothing.

#[cfg(feature = "tracing")]
mod defs {
    pub(crate) use tracing::{span, Level};
}

#[cfg(not(feature = "tracing"))]
mod defs {
    pub(crate) struct Span {}

    impl Span {
        pub(crate) fn entered(&self) -> Self {
            Self {}
        }
    }

    macro_rules! span {
        ($($any:tt)*) => {{
            use crate::tracing::Span;
            Span {}
        }};
    }

    pub(crate) use span;
}

pub(crate) use defs::*;
