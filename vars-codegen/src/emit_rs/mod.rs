/// Rust emitter: renders compiled fields as `collection!`/`match` arms.
mod emit;
mod types;
mod writer;

pub use emit::{emit_arm, emit_lines, render};
pub use types::{function_literal, type_of_literal};
pub use writer::{escape_rs, quoted_list, ArmWriter};
