mod errors;
pub use errors::{ProbeError, ValidateError};

mod outcome;
pub use outcome::ReadOutcome;

mod sampling;
pub use sampling::Sampling;

mod statement;
pub use statement::{KEY_COLUMN, TABLE, key_lookup};

mod task;
pub use task::{EXACT_STALENESS, StaleReadTask};

mod validate;
