//! Field map assembly and output.

mod assembler;
mod writer;

pub use assembler::{CHECKED, FieldMap, FieldValue, FormAssembler, UNCHECKED};
pub use writer::{FormWriter, JsonFormWriter, output_path};
