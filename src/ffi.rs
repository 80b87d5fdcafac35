//! C FFI bindings for naver-jsrsa.
//!
//! Exposes the credential encryption core to C, Python, Go, etc.
//!
//! # Example (C)
//!
//! ```c
//! #include "naver_jsrsa.h"
//!
//! int main() {
//!     JsRsaResult r = jsrsa_encrypt_credentials(modulus, "10001", session_key, id, pw);
//!     if (r.error_code == 0 && r.ciphertext) {
//!         printf("encpw: %s\n", r.ciphertext);
//!     }
//!     jsrsa_free_result(r);
//!     return 0;
//! }
//! ```

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::credentials::encrypt_target;
use crate::crypto::PublicKey;
use crate::error::{JsRsaError, Result};

/// Result structure returned by the encrypt functions.
///
/// `error_code == 0` with a NULL `ciphertext` means no ciphertext was
/// produced and the call may be retried. All string fields must be freed
/// with `jsrsa_free_result`.
#[repr(C)]
pub struct JsRsaResult {
    /// 0 = success, non-zero = error
    pub error_code: i32,
    /// Error message if error_code != 0, NULL otherwise
    pub error_message: *mut c_char,
    /// Lowercase hex ciphertext, NULL on soft failure or error
    pub ciphertext: *mut c_char,
}

impl JsRsaResult {
    fn success(ciphertext: Option<String>) -> Self {
        Self {
            error_code: 0,
            error_message: ptr::null_mut(),
            ciphertext: ciphertext.map(string_to_ptr).unwrap_or(ptr::null_mut()),
        }
    }

    fn error(code: i32, message: String) -> Self {
        Self {
            error_code: code,
            error_message: string_to_ptr(message),
            ciphertext: ptr::null_mut(),
        }
    }

    fn from_result(result: Result<Option<String>>) -> Self {
        match result {
            Ok(ciphertext) => Self::success(ciphertext),
            Err(e) => Self::error(error_code(&e), e.to_string()),
        }
    }
}

fn error_code(e: &JsRsaError) -> i32 {
    match e {
        JsRsaError::InvalidKey(_) => 3,
        JsRsaError::MessageTooLarge { .. } => 4,
        JsRsaError::FieldTooLong { .. } => 5,
        JsRsaError::RandomSourceStalled { .. } => 6,
        _ => 99,
    }
}

/// Convert Rust String to C string pointer.
fn string_to_ptr(s: String) -> *mut c_char {
    CString::new(s)
        .map(|cs| cs.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Convert C string to Rust String, returns None if null or invalid UTF-8.
unsafe fn ptr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Encrypt raw plaintext bytes.
///
/// # Parameters
///
/// - `modulus_hex`: RSA modulus in hex (required)
/// - `exponent_hex`: RSA public exponent in hex (required)
/// - `data`, `data_len`: plaintext bytes; `data` may be NULL when `data_len` is 0
///
/// # Returns
///
/// A `JsRsaResult`, to be freed with `jsrsa_free_result`.
///
/// # Safety
///
/// - `modulus_hex` and `exponent_hex` must be valid null-terminated C strings
/// - `data` must point to `data_len` readable bytes
#[no_mangle]
pub unsafe extern "C" fn jsrsa_encrypt(
    modulus_hex: *const c_char,
    exponent_hex: *const c_char,
    data: *const u8,
    data_len: usize,
) -> JsRsaResult {
    let modulus = match ptr_to_string(modulus_hex) {
        Some(s) => s,
        None => return JsRsaResult::error(1, "modulus_hex is required".to_string()),
    };
    let exponent = match ptr_to_string(exponent_hex) {
        Some(s) => s,
        None => return JsRsaResult::error(2, "exponent_hex is required".to_string()),
    };
    let data = if data_len == 0 {
        &[][..]
    } else if data.is_null() {
        return JsRsaResult::error(1, "data is NULL".to_string());
    } else {
        std::slice::from_raw_parts(data, data_len)
    };

    JsRsaResult::from_result(
        PublicKey::from_hex(&modulus, &exponent).and_then(|key| key.encrypt(data)),
    )
}

/// Assemble and encrypt the login plaintext from its three fields.
///
/// # Safety
///
/// All parameters must be valid null-terminated C strings.
#[no_mangle]
pub unsafe extern "C" fn jsrsa_encrypt_credentials(
    modulus_hex: *const c_char,
    exponent_hex: *const c_char,
    session_key: *const c_char,
    id: *const c_char,
    password: *const c_char,
) -> JsRsaResult {
    let (Some(session_key), Some(id), Some(password)) = (
        ptr_to_string(session_key),
        ptr_to_string(id),
        ptr_to_string(password),
    ) else {
        return JsRsaResult::error(1, "session_key, id and password are required".to_string());
    };

    let target = match encrypt_target(&session_key, &id, &password) {
        Ok(t) => t,
        Err(e) => return JsRsaResult::error(error_code(&e), e.to_string()),
    };

    jsrsa_encrypt(modulus_hex, exponent_hex, target.as_ptr(), target.len())
}

/// Encrypt credentials and return JSON.
///
/// ```json
/// {"success": true, "ciphertext": "0a1b..."}
/// {"success": true, "ciphertext": null}
/// {"success": false, "error": "error message"}
/// ```
///
/// The caller must free the string with `jsrsa_free_string`.
///
/// # Safety
///
/// All parameters must be valid null-terminated C strings.
#[no_mangle]
pub unsafe extern "C" fn jsrsa_encrypt_credentials_json(
    modulus_hex: *const c_char,
    exponent_hex: *const c_char,
    session_key: *const c_char,
    id: *const c_char,
    password: *const c_char,
) -> *mut c_char {
    let result = jsrsa_encrypt_credentials(modulus_hex, exponent_hex, session_key, id, password);

    let json = if result.error_code == 0 {
        let ciphertext = ptr_to_string(result.ciphertext);
        jsrsa_free_result(result);

        serde_json::json!({
            "success": true,
            "ciphertext": ciphertext
        })
        .to_string()
    } else {
        let error =
            ptr_to_string(result.error_message).unwrap_or_else(|| "Unknown error".to_string());
        jsrsa_free_result(result);

        serde_json::json!({
            "success": false,
            "error": error
        })
        .to_string()
    };

    string_to_ptr(json)
}

/// Free a JsRsaResult structure.
///
/// # Safety
///
/// - `result` must have been returned by a `jsrsa_encrypt*` function
/// - Each result must only be freed once
#[no_mangle]
pub unsafe extern "C" fn jsrsa_free_result(result: JsRsaResult) {
    if !result.error_message.is_null() {
        let _ = CString::from_raw(result.error_message);
    }
    if !result.ciphertext.is_null() {
        let _ = CString::from_raw(result.ciphertext);
    }
}

/// Free a string returned by naver-jsrsa FFI functions.
///
/// # Safety
///
/// - `s` must be NULL or a valid pointer previously returned by naver-jsrsa
/// - Each string must only be freed once
#[no_mangle]
pub unsafe extern "C" fn jsrsa_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

/// Get the library version.
///
/// A static string, do NOT free it.
#[no_mangle]
pub extern "C" fn jsrsa_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
