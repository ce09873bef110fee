pub mod crypto;

pub use crypto::twofish::Twofish;
