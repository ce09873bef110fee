use crate::crypto::datatypes::{Key, RoundKey};
use crate::crypto::des::DES;
use crate::crypto::encryption_transformation::CipherTransformation;
use crate::crypto::error::CipherResult;

/// DEAL round function: the half block encrypted by DES under the round key.
///
/// A DES schedule is derived on every call so nothing keyed is shared
/// between threads.
pub(crate) struct DesRoundFunction;

impl CipherTransformation for DesRoundFunction {
    fn transform(&self, half_block: &[u8], round_key: &RoundKey) -> CipherResult<Vec<u8>> {
        let des = DES::with_key(&Key::from(round_key.as_bytes()))?;
        des.encrypt(half_block)
    }
}
