use cosmwasm_std::{Addr, Api, Decimal, StdResult};

use crate::error::ValidationError;

const DENOM_EXTRA_CHARS: [char; 5] = ['/', ':', '.', '_', '-'];

/// Follows cosmos SDK validation logic where denoms can be 3 - 128 characters long
/// and start with a letter, followed but either a letter, number, or separator ( '/' , ':' , '.' , '_' , '-').
/// Reference: <https://github.com/cosmos/cosmos-sdk/blob/7728516abfab950dc7a9120caad4870f1f962df5/types/coin.go#L865-L867>
pub fn validate_native_denom(denom: &str) -> Result<(), ValidationError> {
    if denom.len() < 3 || denom.len() > 128 {
        return Err(ValidationError::InvalidDenom {
            reason: "Invalid denom length".to_string(),
        });
    }

    let mut chars = denom.chars();
    let starts_with_letter = chars.next().map(|c| c.is_ascii_alphabetic()).unwrap_or(false);
    if !starts_with_letter {
        return Err(ValidationError::InvalidDenom {
            reason: "First character is not ASCII alphabetic".to_string(),
        });
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || DENOM_EXTRA_CHARS.contains(&c))) {
        return Err(ValidationError::InvalidDenom {
            reason: "Not all characters are ASCII alphanumeric or one of:  /  :  .  _  -"
                .to_string(),
        });
    }

    Ok(())
}

/// Used when unwrapping an optional address sent in a contract message.
/// Falls back to `default` when no address was provided.
pub fn option_string_to_addr(
    api: &dyn Api,
    option_string: Option<String>,
    default: Addr,
) -> StdResult<Addr> {
    match option_string {
        Some(input_addr) => api.addr_validate(&input_addr),
        None => Ok(default),
    }
}

pub fn decimal_param_le_one(param_value: Decimal, param_name: &str) -> Result<(), ValidationError> {
    if param_value > Decimal::one() {
        return Err(ValidationError::InvalidParam {
            param_name: param_name.to_string(),
            invalid_value: param_value.to_string(),
            predicate: "<= 1".to_string(),
        });
    }

    Ok(())
}

pub fn decimal_param_ge_one(param_value: Decimal, param_name: &str) -> Result<(), ValidationError> {
    if param_value < Decimal::one() {
        return Err(ValidationError::InvalidParam {
            param_name: param_name.to_string(),
            invalid_value: param_value.to_string(),
            predicate: ">= 1".to_string(),
        });
    }

    Ok(())
}
