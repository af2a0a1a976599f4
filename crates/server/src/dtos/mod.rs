pub mod evaluation;
pub mod options;
pub mod query;
pub mod response;
