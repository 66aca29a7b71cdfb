use crate::{Result, constants::AUTH_TOKEN_LEN, error::Error};
use std::fmt;

/// Opaque handle of the physical sensor instance, assigned by the vendor.
pub type DeviceId = u64;

/// Identifier of an enrolled template within a group.
pub type TemplateId = u32;

/// Identifier of a template group (one per user profile).
pub type GroupId = u32;

/// Hardware authentication token proving a recent credential check.
///
/// The token is produced by the platform's authentication service and passed
/// through to the vendor untouched; the bridge never inspects its contents.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken([u8; AUTH_TOKEN_LEN]);

impl AuthToken {
    /// Wrap a fixed-size token.
    pub fn new(bytes: [u8; AUTH_TOKEN_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a token from a slice received over the wire.
    ///
    /// # Errors
    /// Returns `Error::InvalidAuthToken` if the slice is not exactly
    /// [`AUTH_TOKEN_LEN`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; AUTH_TOKEN_LEN] =
            bytes.try_into().map_err(|_| Error::InvalidAuthToken {
                expected: AUTH_TOKEN_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Borrow the raw token bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; AUTH_TOKEN_LEN] {
        &self.0
    }
}

impl Default for AuthToken {
    fn default() -> Self {
        Self([0; AUTH_TOKEN_LEN])
    }
}

// Token contents are credentials; keep them out of logs.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AuthToken([{} bytes])", AUTH_TOKEN_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_auth_token_from_slice() {
        let bytes = [7u8; AUTH_TOKEN_LEN];
        let token = AuthToken::from_slice(&bytes).unwrap();
        assert_eq!(token.as_bytes(), &bytes);
    }

    #[rstest]
    #[case(0)]
    #[case(68)]
    #[case(70)]
    fn test_auth_token_invalid_length(#[case] len: usize) {
        let bytes = vec![0u8; len];
        let result = AuthToken::from_slice(&bytes);
        assert!(matches!(
            result,
            Err(Error::InvalidAuthToken { expected: AUTH_TOKEN_LEN, actual }) if actual == len
        ));
    }

    #[test]
    fn test_auth_token_debug_hides_contents() {
        let token = AuthToken::new([0xAB; AUTH_TOKEN_LEN]);
        let debug = format!("{:?}", token);
        assert_eq!(debug, "AuthToken([69 bytes])");
    }

    #[test]
    fn test_auth_token_default_is_zeroed() {
        assert!(AuthToken::default().as_bytes().iter().all(|b| *b == 0));
    }
}
