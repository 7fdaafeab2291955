mod clock;
mod request_validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use request_validator::{ReportKind, RequestValidator};
