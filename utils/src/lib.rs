mod block;
pub use block::{as_arr_ref, xor_block, KeyBlock};
