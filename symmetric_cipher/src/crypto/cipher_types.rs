use crate::crypto::error::CipherError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
    /// Recognised so configuration can name it, rejected on use.
    RandomDelta,
}

impl CipherMode {
    pub const ALL: [CipherMode; 7] = [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::PCBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
        CipherMode::RandomDelta,
    ];

    pub fn requires_iv(self) -> bool {
        matches!(
            self,
            CipherMode::CBC | CipherMode::PCBC | CipherMode::CFB | CipherMode::OFB
        )
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    Zeros,
    ANSI_X923,
    PKCS7,
    ISO10126,
}

impl PaddingMode {
    pub const ALL: [PaddingMode; 4] = [
        PaddingMode::Zeros,
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ];
}

/// Direction a round network is driven in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encryption,
    Decryption,
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace('-', "_")
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherMode::ECB => "ECB",
            CipherMode::CBC => "CBC",
            CipherMode::PCBC => "PCBC",
            CipherMode::CFB => "CFB",
            CipherMode::OFB => "OFB",
            CipherMode::CTR => "CTR",
            CipherMode::RandomDelta => "RANDOM_DELTA",
        };
        f.write_str(name)
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ECB" => Ok(CipherMode::ECB),
            "CBC" => Ok(CipherMode::CBC),
            "PCBC" => Ok(CipherMode::PCBC),
            "CFB" => Ok(CipherMode::CFB),
            "OFB" => Ok(CipherMode::OFB),
            "CTR" => Ok(CipherMode::CTR),
            "RANDOM_DELTA" | "RANDOMDELTA" => Ok(CipherMode::RandomDelta),
            _ => Err(CipherError::Configuration(format!(
                "unknown encryption mode `{s}`"
            ))),
        }
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaddingMode::Zeros => "ZEROS",
            PaddingMode::ANSI_X923 => "ANSI_X923",
            PaddingMode::PKCS7 => "PKCS7",
            PaddingMode::ISO10126 => "ISO_10126",
        };
        f.write_str(name)
    }
}

impl FromStr for PaddingMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ZEROS" => Ok(PaddingMode::Zeros),
            "ANSI_X923" | "ANSIX923" => Ok(PaddingMode::ANSI_X923),
            "PKCS7" => Ok(PaddingMode::PKCS7),
            "ISO_10126" | "ISO10126" => Ok(PaddingMode::ISO10126),
            _ => Err(CipherError::Configuration(format!(
                "unknown padding mode `{s}`"
            ))),
        }
    }
}
