pub mod context;
pub mod crud;
pub mod error;
pub mod response;
pub mod storage;
pub mod traits;
pub mod validation;

pub use context::{RequestContext, RequestTimeout};
pub use error::{AppError, Result};
pub use response::WebResponse;
pub use storage::Storage;
pub use validation::{Validate, ValidationErrors, Validator};
