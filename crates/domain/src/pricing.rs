// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Currency amounts. All amounts are whole currency units.

use serde::Deserialize;

/// Computes the advance deposit for a service price: half, rounded half-up.
#[must_use]
pub const fn deposit_for(price: u64) -> u64 {
    price.div_ceil(2)
}

/// Computes what the client still owes after the deposit.
#[must_use]
pub const fn remaining_balance(price: u64, paid: u64) -> u64 {
    price.saturating_sub(paid)
}

/// Accepts an amount written as an integer or a float.
///
/// Earlier writers stored plain JSON numbers, so `2500`, `2500.0` and
/// `3750.5` all appear in the wild. Floats are rounded and negative values
/// clamp to zero.
///
/// # Errors
///
/// Returns an error if the value is not a number.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrFloat {
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    match IntOrFloat::deserialize(deserializer)? {
        IntOrFloat::Unsigned(value) => Ok(value),
        IntOrFloat::Signed(value) => Ok(u64::try_from(value).unwrap_or(0)),
        IntOrFloat::Float(value) => {
            if value.is_nan() || value <= 0.0 {
                Ok(0)
            } else {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let rounded: u64 = value.round() as u64;
                Ok(rounded)
            }
        }
    }
}
