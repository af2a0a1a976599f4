pub mod records;
pub mod term;
pub mod validation;

pub use term::{Semester, Term, TermRange};
pub use validation::ValidationError;
