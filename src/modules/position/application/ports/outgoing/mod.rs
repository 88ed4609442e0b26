pub mod position_query;

pub use position_query::{
    PositionApplicationRecord, PositionQuery, PositionQueryError, PositionRecord,
};
