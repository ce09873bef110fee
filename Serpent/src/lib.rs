pub mod crypto;

pub use crypto::serpent::Serpent;
