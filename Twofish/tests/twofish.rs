use hex_literal::hex;
use rand::RngCore;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;
use symmetric_cipher::{Block, CipherContext, CipherError, CipherMode, Key, PaddingMode, SymmetricCipher};
use twofish::crypto::gf256::{gf_mul, gf_mul_rs};
use twofish::crypto::key_schedule::{expand_key, sbox_key_words, TwofishKeyExpansion};
use twofish::crypto::pht::pht;
use twofish::crypto::sboxes::{q0, q1};
use twofish::Twofish;

#[cfg(test)]
mod tests {
    use super::*;

    fn encrypt(key: &[u8], plaintext: &[u8]) -> Vec<u8> {
        Twofish::with_key(&Key::from(key)).unwrap().encrypt(plaintext).unwrap()
    }

    #[test]
    fn test_gf_multiplication() {
        assert_eq!(gf_mul(0x57, 1), 0x57);
        assert_eq!(gf_mul(0x80, 2), 0x69);
        assert_eq!(gf_mul_rs(0x80, 2), 0x4d);
        assert_eq!(gf_mul(0x00, 0xEF), 0x00);
    }

    #[test]
    fn test_pht_wraps() {
        assert_eq!(pht(1, 2), (3, 5));
        assert_eq!(pht(u32::MAX, 1), (0, 1));
    }

    #[test]
    fn test_q_permutations_are_bijective() {
        let mut seen0 = [false; 256];
        let mut seen1 = [false; 256];
        for x in 0..=255u8 {
            seen0[q0(x) as usize] = true;
            seen1[q1(x) as usize] = true;
        }
        assert!(seen0.iter().all(|&s| s));
        assert!(seen1.iter().all(|&s| s));
    }

    #[test]
    fn test_zero_key_subkeys() {
        let subkeys = expand_key(&[0u8; 16]).unwrap();
        assert_eq!(&subkeys[..4], &[0x52C5_4DDE, 0x11F0_626D, 0x7CAC_9D4A, 0x4D1B_4AAA]);
        assert_eq!(&subkeys[38..], &[0xF298_311E, 0x696E_A672]);
        assert_eq!(sbox_key_words(&[0u8; 16]).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_round_key_layout() {
        let round_keys = TwofishKeyExpansion
            .generate_round_keys(&Key::from([0u8; 16]))
            .unwrap();
        assert_eq!(round_keys.len(), 18);
        assert_eq!(round_keys[0].as_bytes(), hex!("DE 4D C5 52 6D 62 F0 11 4A 9D AC 7C AA 4A 1B 4D"));
        assert!(round_keys[2..].iter().all(|rk| rk.len() == 8));
    }

    #[test]
    fn test_twofish_128_chain() {
        assert_eq!(
            encrypt(&[0u8; 16], &[0u8; 16]),
            hex!("9F 58 9F 5C F6 12 2C 32 B6 BF EC 2F 2A E8 C3 5A")
        );
        assert_eq!(
            encrypt(&[0u8; 16], &hex!("9F 58 9F 5C F6 12 2C 32 B6 BF EC 2F 2A E8 C3 5A")),
            hex!("D4 91 DB 16 E7 B1 C3 9E 86 CB 08 6B 78 9F 54 19")
        );
        assert_eq!(
            encrypt(
                &hex!("9F 58 9F 5C F6 12 2C 32 B6 BF EC 2F 2A E8 C3 5A"),
                &hex!("D4 91 DB 16 E7 B1 C3 9E 86 CB 08 6B 78 9F 54 19")
            ),
            hex!("01 9F 98 09 DE 17 11 85 8F AA C3 A3 BA 20 FB C3")
        );
    }

    #[test]
    fn test_twofish_192_and_256() {
        assert_eq!(
            encrypt(&[0u8; 24], &[0u8; 16]),
            hex!("EF A7 1F 78 89 65 BD 44 53 F8 60 17 8F C1 91 01")
        );
        assert_eq!(
            encrypt(
                &hex!("01 23 45 67 89 AB CD EF FE DC BA 98 76 54 32 10 00 11 22 33 44 55 66 77"),
                &[0u8; 16]
            ),
            hex!("CF D1 D2 E5 A9 BE 9C DF 50 1F 13 B8 92 BD 22 48")
        );
        assert_eq!(
            encrypt(&[0u8; 32], &[0u8; 16]),
            hex!("57 FF 73 9D 4D C9 2C 1B D7 FC 01 70 0C C8 21 6F")
        );
        assert_eq!(
            encrypt(
                &hex!("01 23 45 67 89 AB CD EF FE DC BA 98 76 54 32 10 00 11 22 33 44 55 66 77 88 99 AA BB CC DD EE FF"),
                &[0u8; 16]
            ),
            hex!("37 52 7B E0 05 23 34 B8 9F 0C FC CA E8 7C FA 20")
        );
    }

    #[test]
    fn test_twofish_ecb_context_vector() {
        let ctx = CipherContext::new(
            Key::from([0u8; 16]),
            CipherMode::ECB,
            PaddingMode::Zeros,
            Box::new(Twofish::new()),
            None,
        )
        .unwrap();
        assert_eq!(
            ctx.encrypt_bytes(&[0u8; 16]).unwrap(),
            hex!("9F 58 9F 5C F6 12 2C 32 B6 BF EC 2F 2A E8 C3 5A")
        );
    }

    #[test]
    fn test_twofish_random_roundtrip() {
        let mut rng = rand::rng();
        for key_len in [16usize, 24, 32] {
            let mut key = vec![0u8; key_len];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);

            let twofish = Twofish::with_key(&Key::from(key)).unwrap();
            let ciphertext = twofish.encrypt_block(&Block::from(block)).unwrap();
            assert_eq!(twofish.decrypt_block(&ciphertext).unwrap().as_bytes(), block);
        }
    }

    #[test]
    fn test_twofish_errors() {
        assert!(matches!(
            Twofish::with_key(&Key::from([0u8; 20])),
            Err(CipherError::InvalidKeySize { actual: 20, .. })
        ));
        assert!(matches!(Twofish::new().encrypt(&[0u8; 16]), Err(CipherError::State(_))));

        let twofish = Twofish::with_key(&Key::from([0u8; 16])).unwrap();
        assert!(matches!(
            twofish.encrypt(&[0u8; 15]),
            Err(CipherError::InvalidBlockSize { expected: 16, actual: 15 })
        ));
    }

    #[test]
    fn test_instances_keep_their_own_sbox_keys() {
        let zero = Twofish::with_key(&Key::from([0u8; 24])).unwrap();
        let other = Twofish::with_key(&Key::from(hex!(
            "01 23 45 67 89 AB CD EF FE DC BA 98 76 54 32 10 00 11 22 33 44 55 66 77"
        )))
        .unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let cipher = if i % 2 == 0 { &zero } else { &other };
                    s.spawn(move || (i, cipher.encrypt(&[0u8; 16]).unwrap()))
                })
                .collect();
            for handle in handles {
                let (i, ciphertext) = handle.join().unwrap();
                let expected = if i % 2 == 0 {
                    hex!("EF A7 1F 78 89 65 BD 44 53 F8 60 17 8F C1 91 01")
                } else {
                    hex!("CF D1 D2 E5 A9 BE 9C DF 50 1F 13 B8 92 BD 22 48")
                };
                assert_eq!(ciphertext, expected);
            }
        });
    }

    #[tokio::test]
    async fn test_twofish_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("plain.bin");
        let encrypted = dir.path().join("plain.enc");
        let decrypted = dir.path().join("plain.dec");

        let mut data = vec![0u8; 17_000];
        rand::rng().fill_bytes(&mut data);
        data.push(0x01);
        std::fs::write(&input, &data).unwrap();

        let mut iv = vec![0u8; 16];
        rand::rng().fill_bytes(&mut iv);
        let ctx = CipherContext::new(
            Key::from([0x42u8; 32]),
            CipherMode::PCBC,
            PaddingMode::ISO10126,
            Box::new(Twofish::new()),
            Some(iv),
        )
        .unwrap();
        ctx.encrypt_file(&input, &encrypted).await.unwrap();
        assert_eq!(std::fs::metadata(&encrypted).unwrap().len(), 17_008);
        ctx.decrypt_file(&encrypted, &decrypted).await.unwrap();
        assert_eq!(std::fs::read(&decrypted).unwrap(), data);
    }
}
