pub mod gf256;
pub mod key_schedule;
pub mod mds;
pub mod pht;
pub mod round_function;
pub mod sboxes;
pub mod twofish;
