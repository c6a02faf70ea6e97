//! Validation and serialization boundary for the API schemas.
//!
//! Inbound payloads arrive as untyped JSON records; `validate_payload` turns
//! them into typed schema values or reports which field failed. `to_record`
//! goes the other way and always emits every declared field, optional fields
//! included as nulls.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use validator::Validate;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("invalid shape: {0}")]
    Shape(#[from] serde_json::Error),
    #[error("invalid fields: {0}")]
    Fields(#[from] validator::ValidationErrors),
}

pub fn validate_payload<T>(raw: serde_json::Value) -> Result<T, ContractError>
where
    T: DeserializeOwned + Validate,
{
    let entity: T = serde_json::from_value(raw)?;
    entity.validate()?;
    Ok(entity)
}

pub fn to_record<T>(entity: &T) -> Result<serde_json::Value, ContractError>
where
    T: Serialize,
{
    Ok(serde_json::to_value(entity)?)
}
