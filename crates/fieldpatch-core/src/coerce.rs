//! Value coercer: turns a patch value into the exact type of a located
//! field and stores it.

use crate::{
    error::{CoerceError, NumericFailure},
    locate::FieldHandle,
    traits::Refusal,
    value::{NumericClass, NumericLiteral, PatchValue, Value, ValueKind},
};
use std::num::{IntErrorKind, ParseIntError};

/// Convert `input` to the field's type and assign it.
///
/// Numeric literals are parsed at the field's width and signedness.
/// Concrete values must already carry the field's exact kind. A read-only
/// handle is never written.
pub fn coerce(handle: &mut FieldHandle<'_>, input: &PatchValue) -> Result<(), CoerceError> {
    if !handle.is_writable() {
        return Err(CoerceError::NotWritable);
    }

    let expected = handle.kind();
    let value = match input {
        PatchValue::Numeric(literal) => convert_literal(literal, expected)?,
        PatchValue::Concrete(value) => value.clone(),
    };

    handle.assign(value).map_err(|refusal| match refusal {
        Refusal::Kind(rejected) => CoerceError::TypeMismatch {
            expected,
            actual: rejected.kind(),
        },
        Refusal::Unaccepted(value) => CoerceError::ValueNotAccepted { expected, value },
    })
}

/// Build the `Value` a numeric literal stands for when stored as `target`.
pub fn convert_literal(literal: &NumericLiteral, target: ValueKind) -> Result<Value, CoerceError> {
    let fail = |reason| CoerceError::NumericConversion {
        literal: literal.clone(),
        target,
        reason,
    };

    let class = target
        .numeric_class()
        .ok_or_else(|| fail(NumericFailure::UnsupportedKind))?;
    let text = literal.as_str();

    match class {
        NumericClass::Signed { .. } => {
            let parsed = text.parse::<i64>().map_err(|err| fail(int_failure(&err)))?;

            narrow_signed(parsed, target).ok_or_else(|| fail(NumericFailure::Overflow))
        }
        NumericClass::Unsigned { .. } => {
            let parsed = text.parse::<u64>().map_err(|err| fail(int_failure(&err)))?;

            narrow_unsigned(parsed, target).ok_or_else(|| fail(NumericFailure::Overflow))
        }
        NumericClass::Float { bits: 32 } => {
            let parsed = text
                .parse::<f32>()
                .map_err(|_| fail(NumericFailure::Unparsable))?;

            float_failure(parsed.is_nan(), parsed.is_infinite())
                .map_or(Ok(Value::Float32(parsed)), |reason| Err(fail(reason)))
        }
        NumericClass::Float { .. } => {
            let parsed = text
                .parse::<f64>()
                .map_err(|_| fail(NumericFailure::Unparsable))?;

            float_failure(parsed.is_nan(), parsed.is_infinite())
                .map_or(Ok(Value::Float64(parsed)), |reason| Err(fail(reason)))
        }
    }
}

fn int_failure(err: &ParseIntError) -> NumericFailure {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumericFailure::Overflow,
        _ => NumericFailure::Unparsable,
    }
}

// Parsing saturates to infinity past the width's range.
const fn float_failure(nan: bool, infinite: bool) -> Option<NumericFailure> {
    if nan {
        Some(NumericFailure::Unparsable)
    } else if infinite {
        Some(NumericFailure::Overflow)
    } else {
        None
    }
}

fn narrow_signed(parsed: i64, target: ValueKind) -> Option<Value> {
    match target {
        ValueKind::Int8 => i8::try_from(parsed).ok().map(Value::Int8),
        ValueKind::Int16 => i16::try_from(parsed).ok().map(Value::Int16),
        ValueKind::Int32 => i32::try_from(parsed).ok().map(Value::Int32),
        ValueKind::Int64 => Some(Value::Int64(parsed)),
        ValueKind::Isize => isize::try_from(parsed).ok().map(Value::Isize),
        _ => None,
    }
}

fn narrow_unsigned(parsed: u64, target: ValueKind) -> Option<Value> {
    match target {
        ValueKind::Uint8 => u8::try_from(parsed).ok().map(Value::Uint8),
        ValueKind::Uint16 => u16::try_from(parsed).ok().map(Value::Uint16),
        ValueKind::Uint32 => u32::try_from(parsed).ok().map(Value::Uint32),
        ValueKind::Uint64 => Some(Value::Uint64(parsed)),
        ValueKind::Usize => usize::try_from(parsed).ok().map(Value::Usize),
        _ => None,
    }
}

///
/// TESTS
///
