mod holocron;

pub use holocron::{ApiErrorBody, ApiErrorObject, HolocronError};
