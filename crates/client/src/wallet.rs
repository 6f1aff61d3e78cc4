//! The transaction-signing seam and address validation.
//!
//! Real signing (Schnorr BIP-340 over canonical transaction bytes, with the
//! key loaded from secure storage) is a hard external dependency with no
//! default implementation. A hash is not a signature: the placeholder
//! refuses loudly instead of producing an unauthenticated transaction.

use parthenon_types::error::ClientError;

/// Prefix of every valid ParthenonChain address.
pub const ADDRESS_PREFIX: &str = "parthenon1q";

/// Minimum length of a valid address.
pub const MIN_ADDRESS_LEN: usize = 40;

/// Shallow syntactic validation of an address.
pub fn validate_address(address: &str) -> bool {
    address.starts_with(ADDRESS_PREFIX) && address.len() >= MIN_ADDRESS_LEN
}

/// The seam where a real asymmetric signer plugs in.
pub trait TransactionSigner: Send + Sync {
    /// Signs the canonical byte encoding of a transaction, returning the
    /// signature bytes.
    fn sign(&self, canonical_tx: &[u8]) -> Result<Vec<u8>, ClientError>;
}

/// Placeholder signer that always fails with
/// [`ClientError::SigningUnimplemented`].
pub struct UnimplementedSigner;

impl TransactionSigner for UnimplementedSigner {
    fn sign(&self, _canonical_tx: &[u8]) -> Result<Vec<u8>, ClientError> {
        Err(ClientError::SigningUnimplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parthenon_types::error::ErrorCode;

    #[test]
    fn address_validation() {
        assert!(validate_address(
            "parthenon1qabcdef0123456789abcdef0123456789ab"
        ));
        assert!(!validate_address("parthenon1qshort"));
        assert!(!validate_address(
            "other1qabcdef0123456789abcdef0123456789abcdef"
        ));
    }

    #[test]
    fn unimplemented_signer_fails_loudly() {
        let err = UnimplementedSigner.sign(b"canonical tx bytes").unwrap_err();
        assert_eq!(err.code(), "SIGNING_UNIMPLEMENTED");
        assert!(err.to_string().contains("not yet implemented"));
    }
}
