use hex_literal::hex;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::des_key_expansion::DesKeyExpansion;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;
use symmetric_cipher::{
    Block, CipherContext, CipherError, CipherMode, Key, PaddingMode, SymmetricCipher,
};

#[cfg(test)]
mod tests {
    use super::*;

    const FIPS_KEY: [u8; 8] = hex!("01 23 45 67 89 AB CD EF");
    const FIPS_IV: [u8; 8] = hex!("12 34 56 78 90 AB CD EF");
    const FIPS_PLAINTEXT: &[u8; 24] = b"Now is the time for all ";

    fn des_context(mode: CipherMode, padding: PaddingMode, iv: Option<Vec<u8>>) -> CipherContext {
        CipherContext::new(Key::from(FIPS_KEY), mode, padding, Box::new(DES::new()), iv).unwrap()
    }

    #[test]
    fn test_des_textbook_vector() {
        let key = Key::from(hex!("13 34 57 79 9B BC DF F1"));
        let plaintext = hex!("01 23 45 67 89 AB CD EF");
        let expected_ciphertext = hex!("85 E8 13 54 0F 0A B4 05");

        let des = DES::with_key(&key).unwrap();
        let ciphertext = des.encrypt(&plaintext).unwrap();
        assert_eq!(ciphertext, expected_ciphertext);
        assert_eq!(des.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_des_first_round_key() {
        let key = Key::from(hex!("13 34 57 79 9B BC DF F1"));
        let round_keys = DesKeyExpansion.generate_round_keys(&key).unwrap();
        assert_eq!(round_keys.len(), 16);
        assert_eq!(round_keys[0].as_bytes(), hex!("1B 02 EF FC 70 72"));
        assert_eq!(round_keys[15].as_bytes(), hex!("CB 3D 8B 0E 17 F5"));
    }

    #[test]
    fn test_des_ecb_pkcs7_known_vector() {
        let ctx = CipherContext::new(
            Key::from(hex!("11 11 11 11 11 11 11 11")),
            CipherMode::ECB,
            PaddingMode::PKCS7,
            Box::new(DES::new()),
            None,
        )
        .unwrap();
        let ciphertext = ctx.encrypt_bytes(&[0u8; 8]).unwrap();
        assert_eq!(ciphertext, hex!("82 E1 36 65 B4 62 4D F5"));
    }

    #[test]
    fn test_des_ctr_ansi_x923_roundtrip() {
        let ctx = CipherContext::new(
            Key::from(hex!("11 11 11 11 11 11 11 11")),
            CipherMode::CTR,
            PaddingMode::ANSI_X923,
            Box::new(DES::new()),
            None,
        )
        .unwrap();
        let ciphertext = ctx.encrypt_bytes(&[0u8; 8]).unwrap();
        // counter block 0 is all zeros, so the keystream is E(0)
        assert_eq!(ciphertext, hex!("82 E1 36 65 B4 62 4D F5"));
        assert_eq!(ctx.decrypt_bytes(&ciphertext).unwrap(), vec![0u8; 8]);
    }

    #[test]
    fn test_des_fips81_ecb() {
        let ctx = des_context(CipherMode::ECB, PaddingMode::PKCS7, None);
        let ciphertext = ctx.encrypt_bytes(FIPS_PLAINTEXT).unwrap();
        assert_eq!(
            ciphertext,
            hex!("3F A4 0E 8A 98 4D 48 15 6A 27 17 87 AB 88 83 F9 89 3D 51 EC 4B 56 3B 53")
        );
    }

    #[test]
    fn test_des_fips81_cbc() {
        let ctx = des_context(CipherMode::CBC, PaddingMode::PKCS7, Some(FIPS_IV.to_vec()));
        let ciphertext = ctx.encrypt_bytes(FIPS_PLAINTEXT).unwrap();
        assert_eq!(
            ciphertext,
            hex!("E5 C7 CD DE 87 2B F2 7C 43 E9 34 00 8C 38 9C 0F 68 37 88 49 9A 7C 05 F6")
        );
    }

    #[test]
    fn test_des_fips81_cfb() {
        let ctx = des_context(CipherMode::CFB, PaddingMode::PKCS7, Some(FIPS_IV.to_vec()));
        let ciphertext = ctx.encrypt_bytes(FIPS_PLAINTEXT).unwrap();
        assert_eq!(
            ciphertext,
            hex!("F3 09 62 49 C7 F4 6E 51 A6 9E 83 9B 1A 92 F7 84 03 46 71 33 89 8E A6 22")
        );
    }

    #[test]
    fn test_des_fips81_ofb() {
        let ctx = des_context(CipherMode::OFB, PaddingMode::PKCS7, Some(FIPS_IV.to_vec()));
        let ciphertext = ctx.encrypt_bytes(FIPS_PLAINTEXT).unwrap();
        assert_eq!(
            ciphertext,
            hex!("F3 09 62 49 C7 F4 6E 51 35 F2 4A 24 2E EB 3D 3F 3D 6D 5B E3 25 5A F8 C3")
        );
    }

    #[test]
    fn test_des_pcbc_vector() {
        let ctx = des_context(CipherMode::PCBC, PaddingMode::PKCS7, Some(FIPS_IV.to_vec()));
        let ciphertext = ctx.encrypt_bytes(FIPS_PLAINTEXT).unwrap();
        // first block matches CBC since P[-1] is zero
        assert_eq!(
            ciphertext,
            hex!("E5 C7 CD DE 87 2B F2 7C CB 70 B7 8C 59 49 42 28 26 5F 22 3F C0 C6 55 A5")
        );
        assert_eq!(ctx.decrypt_bytes(&ciphertext).unwrap(), FIPS_PLAINTEXT);
    }

    #[test]
    fn test_des_ctr_vector() {
        let ctx = des_context(CipherMode::CTR, PaddingMode::PKCS7, None);
        let ciphertext = ctx.encrypt_bytes(FIPS_PLAINTEXT).unwrap();
        assert_eq!(
            ciphertext,
            hex!("9B BB 38 D7 49 1B 1D 79 51 22 93 AD 3D 94 5F 14 B3 F6 18 D5 6A D8 75 C9")
        );
    }

    #[test]
    fn test_des_rejects_bad_key_and_block() {
        let mut des = DES::new();
        assert!(matches!(
            des.set_round_keys(&Key::from([0u8; 7])),
            Err(CipherError::InvalidKeySize { actual: 7, .. })
        ));
        assert!(matches!(
            des.encrypt_block(&Block::from([0u8; 8])),
            Err(CipherError::State(_))
        ));

        des.set_round_keys(&Key::from(FIPS_KEY)).unwrap();
        assert!(matches!(
            des.encrypt_block(&Block::from([0u8; 9])),
            Err(CipherError::InvalidBlockSize { expected: 8, actual: 9 })
        ));
    }
}
