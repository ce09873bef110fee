use rand::RngCore;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use symmetric_cipher::crypto::deal::DEAL;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::{CipherContext, CipherMode, Key, PaddingMode, SymmetricCipher};

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

/// Encrypts `input` to `<input>.<cipher>.enc`, decrypts it back to
/// `<input>.<cipher>.dec` and checks the bytes survived.
async fn roundtrip(
    name: &str,
    cipher: Box<dyn SymmetricCipher>,
    key_len: usize,
    mode: CipherMode,
    padding: PaddingMode,
    input: &PathBuf,
) -> Result<(), Box<dyn Error>> {
    let block_size = cipher.block_size();
    let iv = mode.requires_iv().then(|| random_bytes(block_size));
    let ctx = CipherContext::new(Key::from(random_bytes(key_len)), mode, padding, cipher, iv)?;

    let encrypted = input.with_extension(format!("{name}.enc"));
    let decrypted = input.with_extension(format!("{name}.dec"));

    let written = ctx.encrypt_file(input, &encrypted).await?;
    println!("{name} {mode}/{padding}: {written} bytes -> {}", encrypted.display());
    ctx.decrypt_file(&encrypted, &decrypted).await?;

    if fs::read(input)? == fs::read(&decrypted)? {
        println!("{name} {mode}/{padding}: round trip OK");
    } else {
        println!("{name} {mode}/{padding}: decrypted file differs (lossy padding?)");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        eprintln!("usage: encrypt_file <path> [mode] [padding]");
        std::process::exit(2);
    };
    let mode: CipherMode = args.next().as_deref().unwrap_or("cbc").parse()?;
    let padding: PaddingMode = args.next().as_deref().unwrap_or("pkcs7").parse()?;

    roundtrip("des", Box::new(DES::new()), 8, mode, padding, &input).await?;
    roundtrip("deal", Box::new(DEAL::new()), 24, mode, padding, &input).await?;
    Ok(())
}
