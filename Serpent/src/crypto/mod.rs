pub mod key_schedule;
pub mod linear_transform;
pub mod sboxes;
pub mod serpent;
pub mod words;
