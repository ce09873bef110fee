use symmetric_cipher::crypto::padding::{apply_padding, padding_length, remove_padding};
use symmetric_cipher::PaddingMode;

#[test]
fn test_padding_length() {
    assert_eq!(padding_length(0, 8), 0);
    assert_eq!(padding_length(5, 8), 3);
    assert_eq!(padding_length(8, 8), 0);
    assert_eq!(padding_length(9, 8), 7);
}

#[test]
fn test_zeros_padding() {
    let padded = apply_padding(vec![1, 2, 3], 8, PaddingMode::Zeros);
    assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 0]);
    assert_eq!(remove_padding(padded, 8, PaddingMode::Zeros), vec![1, 2, 3]);
}

#[test]
fn test_ansi_x923_padding() {
    let padded = apply_padding(vec![1, 2, 3], 8, PaddingMode::ANSI_X923);
    assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 5]);
    assert_eq!(remove_padding(padded, 8, PaddingMode::ANSI_X923), vec![1, 2, 3]);
}

#[test]
fn test_pkcs7_padding() {
    let padded = apply_padding(vec![9; 13], 16, PaddingMode::PKCS7);
    assert_eq!(&padded[13..], &[3, 3, 3]);
    assert_eq!(remove_padding(padded, 16, PaddingMode::PKCS7), vec![9; 13]);
}

#[test]
fn test_iso10126_padding() {
    let padded = apply_padding(vec![7; 2], 8, PaddingMode::ISO10126);
    assert_eq!(padded.len(), 8);
    assert_eq!(&padded[..2], &[7, 7]);
    assert_eq!(padded[7], 6);
    assert_eq!(remove_padding(padded, 8, PaddingMode::ISO10126), vec![7; 2]);
}

#[test]
fn test_aligned_input_gets_no_padding() {
    for padding in PaddingMode::ALL {
        assert_eq!(apply_padding(vec![1; 16], 8, padding), vec![1; 16]);
        assert!(apply_padding(Vec::new(), 8, padding).is_empty());
    }
}

#[test]
fn test_oversized_pad_byte_leaves_data_untouched() {
    let data = vec![1, 2, 3, 4, 5, 6, 7, 200];
    for padding in [PaddingMode::ANSI_X923, PaddingMode::PKCS7, PaddingMode::ISO10126] {
        assert_eq!(remove_padding(data.clone(), 8, padding), data);
    }
}

#[test]
fn test_zeros_removal_strips_plaintext_zeros_in_last_block() {
    let padded = apply_padding(vec![1, 0], 4, PaddingMode::Zeros);
    assert_eq!(remove_padding(padded, 4, PaddingMode::Zeros), vec![1]);
}

#[test]
fn test_zeros_removal_stops_at_last_block() {
    let mut plaintext = vec![0xAA];
    plaintext.extend_from_slice(&[0u8; 9]);
    let padded = apply_padding(plaintext, 8, PaddingMode::Zeros);
    assert_eq!(padded.len(), 16);

    let mut expected = vec![0xAA];
    expected.extend_from_slice(&[0u8; 7]);
    assert_eq!(remove_padding(padded, 8, PaddingMode::Zeros), expected);
}

#[test]
fn test_zeros_removal_of_all_zero_last_block() {
    let data = vec![1, 2, 3, 4, 0, 0, 0, 0];
    assert_eq!(remove_padding(data, 4, PaddingMode::Zeros), vec![1, 2, 3, 4]);
    assert!(remove_padding(vec![0u8; 3], 4, PaddingMode::Zeros).is_empty());
}
