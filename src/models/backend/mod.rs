mod payload;

pub use payload::{ColumnarPayload, QueryResponse};
