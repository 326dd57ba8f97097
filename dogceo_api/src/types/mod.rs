mod envelope;
pub use self::envelope::{Envelope, SUCCESS_STATUS};
