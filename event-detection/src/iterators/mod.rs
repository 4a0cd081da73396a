pub mod event;

use super::{Detector, Real};
pub use event::{EventFilter, EventIter};
