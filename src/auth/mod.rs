//! API key management for the SimpleSwap API.
//!
//! SimpleSwap authenticates every call with an `api_key` query parameter.
//! This module keeps that key out of `Debug` output and lets callers plug in
//! their own key source.

mod credentials;

pub use credentials::{
    API_KEY_ENV_VAR, Credentials, CredentialsProvider, EnvCredentials, StaticCredentials,
};
