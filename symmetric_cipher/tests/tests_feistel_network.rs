use std::sync::Arc;
use symmetric_cipher::crypto::encryption_transformation::CipherTransformation;
use symmetric_cipher::crypto::feistel_network::FeistelNetwork;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;
use symmetric_cipher::{CipherError, CipherResult, Key, Operation, RoundKey};

#[cfg(test)]
mod tests {
    use super::*;

    struct MockKeyExpansion(usize);

    impl KeyExpansion for MockKeyExpansion {
        fn generate_round_keys(&self, key: &Key) -> CipherResult<Vec<RoundKey>> {
            Ok((0..self.0)
                .map(|i| {
                    RoundKey::from(
                        key.as_bytes()
                            .iter()
                            .take(4)
                            .map(|b| b.wrapping_add(i as u8))
                            .collect::<Vec<u8>>(),
                    )
                })
                .collect())
        }
    }

    struct MockTransformation;

    impl CipherTransformation for MockTransformation {
        fn transform(&self, block: &[u8], round_key: &RoundKey) -> CipherResult<Vec<u8>> {
            Ok(block
                .iter()
                .zip(round_key.as_bytes().iter().cycle())
                .map(|(b, k)| b.rotate_left(3) ^ k)
                .collect())
        }
    }

    fn network(rounds: usize, keys: usize) -> FeistelNetwork {
        FeistelNetwork::new(
            rounds,
            Arc::new(MockKeyExpansion(keys)),
            Arc::new(MockTransformation),
        )
    }

    #[test]
    fn test_feistel_encrypt_decrypt_roundtrip() {
        let mut network = network(3, 3);
        network.set_round_keys(&Key::from(*b"dummykey")).unwrap();

        let block = b"\x12\x34\x56\x78\x9A\xBC\xDE\xF0";
        let encrypted = network.perform_rounds(block, Operation::Encryption).unwrap();
        assert_eq!(encrypted.len(), block.len());
        assert_ne!(&encrypted[..], &block[..]);

        let decrypted = network.perform_rounds(&encrypted, Operation::Decryption).unwrap();
        assert_eq!(decrypted, block);
    }

    #[test]
    fn test_feistel_single_round_layout() {
        // one round: output = (L ^ F(R)) || R
        let mut network = network(1, 1);
        network.set_round_keys(&Key::from([0u8; 4])).unwrap();
        let out = network
            .perform_rounds(&[0x00, 0x00, 0x01, 0x02], Operation::Encryption)
            .unwrap();
        assert_eq!(out, vec![0x08, 0x10, 0x01, 0x02]);
    }

    #[test]
    fn test_feistel_odd_block_rejected() {
        let mut network = network(2, 2);
        network.set_round_keys(&Key::from([1u8; 4])).unwrap();
        assert!(matches!(
            network.perform_rounds(&[0u8; 7], Operation::Encryption),
            Err(CipherError::UnevenBlock { actual: 7 })
        ));
        assert!(matches!(
            network.perform_rounds(&[0u8; 1], Operation::Decryption),
            Err(CipherError::UnevenBlock { actual: 1 })
        ));
    }

    #[test]
    fn test_feistel_requires_round_keys() {
        let network = network(2, 2);
        assert!(matches!(
            network.perform_rounds(&[0u8; 8], Operation::Encryption),
            Err(CipherError::State(_))
        ));
    }

    #[test]
    fn test_feistel_round_key_count_must_match() {
        let mut network = network(4, 3);
        assert!(matches!(
            network.set_round_keys(&Key::from([1u8; 4])),
            Err(CipherError::Configuration(_))
        ));
        assert!(!network.is_keyed());
    }
}
