//! WASM bindings for slip39
//!
//! JavaScript-friendly wrappers over the split/combine workflows. No word
//! list ships with the crate, so every call takes the 1024 words as a
//! string array.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::Wordlist;
use crate::commands::{self, SplitOptions};
use crate::domain::{Group, IterationExponent};

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of a split operation (for JSON serialization)
#[derive(Serialize, Deserialize)]
pub struct SplitResult {
    /// The generated shares as SLIP-39 mnemonics
    pub shares: Vec<String>,
    /// Number of shares generated
    pub share_count: u8,
    /// Threshold required to reconstruct
    pub threshold: u8,
    /// Group label
    pub group_name: String,
}

fn load_wordlist(words: &[String]) -> Result<Wordlist, JsValue> {
    Wordlist::new(words).map_err(|e| JsValue::from_str(&format!("Invalid word list: {e}")))
}

/// Split a hex master secret into SLIP-39 shares
///
/// # Arguments
/// * `secret_hex` - Master secret, at least 16 bytes with an even length
/// * `shares` - Total number of shares to create (1-16)
/// * `threshold` - Minimum number of shares needed to reconstruct (1-shares)
/// * `iteration_exponent` - PBKDF2 cost exponent (0-31)
/// * `passphrase` - Encryption passphrase, may be empty
/// * `wordlist` - The 1024 mnemonic words
///
/// # Returns
/// JSON string containing the shares and metadata, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = wasm_split("bb54aac4b89dc868ba37d9cc21b2cece", 5, 3, 0, "", words);
/// const data = JSON.parse(result);
/// console.log(`${data.group_name}: ${data.shares.length} shares`);
/// ```
#[wasm_bindgen]
pub fn wasm_split(
    secret_hex: &str,
    shares: u8,
    threshold: u8,
    iteration_exponent: u8,
    passphrase: &str,
    wordlist: Vec<String>,
) -> Result<String, JsValue> {
    let wordlist = load_wordlist(&wordlist)?;

    let group = Group::new(None, shares, threshold)
        .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {e}")))?;
    let iteration_exponent = IterationExponent::new(iteration_exponent)
        .map_err(|e| JsValue::from_str(&format!("Invalid iteration exponent: {e}")))?;
    let options = SplitOptions::new(group, iteration_exponent);

    let share_mnemonics = commands::split_secret(secret_hex, &options, passphrase, &wordlist)
        .map_err(|e| JsValue::from_str(&format!("Split failed: {e:#}")))?;

    let result = SplitResult {
        shares: share_mnemonics.iter().map(ToString::to_string).collect(),
        share_count: shares,
        threshold,
        group_name: options.group.name().to_string(),
    };

    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Combine SLIP-39 shares to reconstruct the master secret
///
/// # Returns
/// The master secret as hex, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const secret = wasm_combine([share1, share2, share3], "", words);
/// ```
#[wasm_bindgen]
pub fn wasm_combine(
    shares: Vec<String>,
    passphrase: &str,
    wordlist: Vec<String>,
) -> Result<String, JsValue> {
    let wordlist = load_wordlist(&wordlist)?;
    commands::combine_shares(&shares, passphrase, &wordlist)
        .map(|secret| secret.as_str().to_string())
        .map_err(|e| JsValue::from_str(&format!("Combine failed: {e:#}")))
}

/// Parse a SLIP-39 share to extract its metadata
///
/// # Returns
/// JSON string with identifier, iteration exponent, group and member
/// fields, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const data = JSON.parse(wasm_parse_share(share, words));
/// console.log(`Threshold: ${data.member_threshold}, Index: ${data.member_index}`);
/// ```
#[wasm_bindgen]
pub fn wasm_parse_share(share: &str, wordlist: Vec<String>) -> Result<String, JsValue> {
    let wordlist = load_wordlist(&wordlist)?;
    let info = commands::inspect_share(share, &wordlist)
        .map_err(|e| JsValue::from_str(&format!("Parse failed: {e:#}")))?;

    serde_json::to_string(&info)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Generate a random master secret
///
/// # Arguments
/// * `byte_length` - Secret length in bytes (at least 16, even)
///
/// # Example (JavaScript)
/// ```javascript
/// const secret = wasm_generate_secret(32);
/// ```
#[wasm_bindgen]
pub fn wasm_generate_secret(byte_length: usize) -> Result<String, JsValue> {
    commands::generate_secret(byte_length)
        .map(|secret| secret.as_str().to_string())
        .map_err(|e| JsValue::from_str(&format!("Invalid secret length: {e}")))
}
