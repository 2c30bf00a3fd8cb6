//! Token issuance.
//!
//! Tokens are signed with the secret of the application they are issued
//! for, so every relying application can verify its own tokens.

mod issuer;

pub use issuer::{decode_token, JwtSigner, SignError, TokenClaims, TokenIssuer, TokenSigner};
