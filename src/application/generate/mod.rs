//! Generate Module
//!
//! One end-to-end run: code, copy, optional styles, submission, and the
//! per-run artifact folder.
//!
//! ## Structure
//!
//! - `options` - Run inputs (`GenerateOptions`)
//! - `result` - Run results (`GenerateResult`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::{
    run_dir_name, GenerateUseCase, CSS_FILE, DATA_FILE, FINAL_FILE, FIRST_REVISION_FILE,
};
