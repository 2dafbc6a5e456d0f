//! Form definitions bound from submitted request data.

pub mod category;
pub mod program_search;

pub use category::CategoryForm;
pub use program_search::ProgramSearchForm;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("The {0} field must not be blank")]
    Blank(&'static str),

    #[error("The {field} field must be {max} characters or less")]
    TooLong { field: &'static str, max: usize },
}
