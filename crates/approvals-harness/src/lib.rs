pub mod execute;
pub mod format;
pub mod outcome;
pub mod value;

pub use execute::{execute, invoke, ExecutionRecord};
pub use format::{format_args_tuple, render_document, ArgsAndResultFormatter, Formatter};
pub use outcome::{Failure, Outcome};
pub use value::Value;
