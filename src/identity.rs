use sha2::{Digest, Sha256};

pub const ID_PREFIX: &str = "tx_";
const ID_HEX_LEN: usize = 12;
const FIELD_SEPARATOR: &str = "\u{1f}";

/// Content-derived transaction id.
///
/// The six fields are joined with the ASCII unit separator, hashed with
/// SHA-256, and the first 12 hex characters are kept behind `tx_`. The
/// running balance makes otherwise identical same-day purchases distinct.
pub fn derive_id(
    value_date: &str,
    secondary_date: &str,
    description: &str,
    movement_detail: &str,
    amount: f64,
    balance_after: &str,
) -> String {
    let amount = amount.to_string();
    let joined = [
        value_date,
        secondary_date,
        description,
        movement_detail,
        amount.as_str(),
        balance_after,
    ]
    .join(FIELD_SEPARATOR);
    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{ID_PREFIX}{}", &digest[..ID_HEX_LEN])
}
