mod bound;
pub use bound::TimestampBound;

mod client;
pub use client::{Connector, DatabaseClient, RowStream};

mod errors;
pub use errors::ClientError;

mod memory;
pub use memory::{MemoryConnector, MemoryDatabase};

mod options;
pub use options::{ConnectOptions, DatabaseId};

mod statement;
pub use statement::Statement;
