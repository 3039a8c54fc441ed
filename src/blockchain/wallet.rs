//! Generated accounts and their key material.
//!
//! # Security
//! - Keys are generated locally from the OS RNG
//! - `Debug` never prints the secret; the hex accessors are the only way out
//! - Callers that log `private_key_hex` write the key in cleartext

use alloy::hex;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

/// An address with its signing key. Immutable once created.
#[derive(Clone)]
pub struct Account {
    signer: PrivateKeySigner,
}

impl Account {
    /// Generate a fresh random account.
    pub fn generate() -> Self {
        Self {
            signer: PrivateKeySigner::random(),
        }
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// `0x`-prefixed 32-byte secret key.
    pub fn private_key_hex(&self) -> String {
        hex::encode_prefixed(self.signer.to_bytes())
    }

    /// `0x04`-prefixed uncompressed SEC1 public key.
    pub fn public_key_hex(&self) -> String {
        format!("0x04{}", hex::encode(self.signer.public_key()))
    }

    /// Signer for transaction signing.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for Account {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_is_uncompressed() {
        let account = Account::generate();
        let public = account.public_key_hex();
        assert!(public.starts_with("0x04"));
        assert_eq!(public.len(), 2 + 65 * 2);
        assert_eq!(account.private_key_hex().len(), 2 + 32 * 2);
    }

    #[test]
    fn test_address_derives_from_public_key() {
        let account = Account::generate();
        let public = hex::decode(&account.public_key_hex()[4..]).unwrap();
        assert_eq!(Address::from_raw_public_key(&public), account.address());
    }

    #[test]
    fn test_generated_accounts_are_distinct() {
        let a = Account::generate();
        let b = Account::generate();
        assert_ne!(a.address(), b.address());
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_hides_secret() {
        let account = Account::generate();
        let debug = format!("{:?}", account);
        assert!(!debug.contains(&account.private_key_hex()[2..]));
        assert!(debug.contains("address"));
    }
}
