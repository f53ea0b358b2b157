//! Response decoding and API error mapping.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, SimpleSwapError};

/// The only status SimpleSwap uses for success.
const STATUS_OK: u16 = 200;

/// Decode a response body into either the expected payload or an error.
///
/// - `200`: the body is decoded as `T`.
/// - anything else: the body is decoded as an [`ApiError`] and returned as
///   [`SimpleSwapError::Api`]. A `null` body yields an empty error, and a
///   zero/missing `status` in the body is filled in from the HTTP status.
///
/// A body that fails to decode in either branch yields
/// [`SimpleSwapError::Decode`]; it is never masked as an empty payload.
pub fn decode_response<T>(status: u16, body: &[u8]) -> Result<T, SimpleSwapError>
where
    T: DeserializeOwned,
{
    if status != STATUS_OK {
        let mut api_error = serde_json::from_slice::<Option<ApiError>>(body)
            .map_err(|source| {
                tracing::warn!(status, "failed to decode API error body: {}", source);
                SimpleSwapError::Decode { status, source }
            })?
            .unwrap_or_default();
        if api_error.status == 0 {
            api_error.status = status;
        }
        return Err(SimpleSwapError::Api(api_error));
    }

    serde_json::from_slice(body).map_err(|source| SimpleSwapError::Decode { status, source })
}
