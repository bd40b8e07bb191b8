//! Context window tensor: the numeric form of a request's `inputs`.

use half::bf16;
use serde_json::Value;

use crate::{DType, HorizonError, Result, Tensor};

/// Row-major bf16 tensor holding a time-series context window.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextTensor {
    data: Vec<bf16>,
    shape: Vec<usize>,
}

impl ContextTensor {
    pub fn new(data: Vec<bf16>, shape: Vec<usize>) -> Result<Self> {
        validate_shape(data.len(), &shape)?;
        Ok(Self { data, shape })
    }

    /// Build a tensor from f32 values, rounding each to bf16.
    pub fn from_f32(data: &[f32], shape: &[usize]) -> Result<Self> {
        Self::new(data.iter().map(|&x| bf16::from_f32(x)).collect(), shape.to_vec())
    }

    /// Convert a JSON number or (nested) array of numbers.
    ///
    /// Nesting must be uniform: all siblings share one shape. Empty arrays
    /// are allowed and contribute a zero-length dimension.
    pub fn from_json(value: &Value) -> Result<Self> {
        let shape = infer_shape(value)?;
        checked_numel(&shape).ok_or_else(|| {
            HorizonError::Validation(format!("inputs shape {shape:?} is too large"))
        })?;
        // Grows only as leaves are visited; a ragged payload can claim a
        // shape far larger than the values it holds.
        let mut data = Vec::new();
        flatten_into(value, &shape, &mut data)?;
        Self::new(data, shape)
    }

    pub fn data(&self) -> &[bf16] {
        &self.data
    }

    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.data.iter().map(|x| x.to_f32()).collect()
    }

    /// Rows of a rank-2 tensor as f32 vectors, or the whole tensor as one row
    /// when rank 1.
    pub fn rows_f32(&self) -> Option<Vec<Vec<f32>>> {
        match self.shape.as_slice() {
            [_] => Some(vec![self.to_f32_vec()]),
            [_, cols] => {
                let cols = *cols;
                if cols == 0 {
                    return Some(vec![Vec::new(); self.shape[0]]);
                }
                Some(
                    self.data
                        .chunks(cols)
                        .map(|row| row.iter().map(|x| x.to_f32()).collect())
                        .collect(),
                )
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Tensor for ContextTensor {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn dtype(&self) -> DType {
        DType::BF16
    }
}

fn checked_numel(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

fn validate_shape(len: usize, shape: &[usize]) -> Result<()> {
    if checked_numel(shape) != Some(len) {
        return Err(HorizonError::ShapeMismatch {
            expected: shape.to_vec(),
            got: vec![len],
        });
    }
    Ok(())
}

/// Walk the first element at each level to find the candidate shape.
/// Uniformity is checked later, while flattening.
fn infer_shape(value: &Value) -> Result<Vec<usize>> {
    let mut shape = Vec::new();
    let mut cursor = value;
    loop {
        match cursor {
            Value::Number(_) => return Ok(shape),
            Value::Array(items) => {
                shape.push(items.len());
                match items.first() {
                    Some(first) => cursor = first,
                    None => return Ok(shape),
                }
            }
            other => return Err(non_numeric(other)),
        }
    }
}

fn flatten_into(value: &Value, shape: &[usize], out: &mut Vec<bf16>) -> Result<()> {
    match (value, shape.split_first()) {
        (Value::Number(n), None) => {
            let x = n
                .as_f64()
                .ok_or_else(|| HorizonError::Validation(format!("number {n} is not representable")))?;
            out.push(bf16::from_f64(x));
            Ok(())
        }
        (Value::Array(items), Some((&dim, rest))) => {
            if items.len() != dim {
                return Err(HorizonError::Validation(format!(
                    "ragged inputs: expected {dim} elements, found {}",
                    items.len()
                )));
            }
            for item in items {
                flatten_into(item, rest, out)?;
            }
            Ok(())
        }
        (Value::Number(_), Some(_)) => Err(HorizonError::Validation(
            "ragged inputs: found a number where an array was expected".into(),
        )),
        (Value::Array(_), None) => Err(HorizonError::Validation(
            "ragged inputs: found an array where a number was expected".into(),
        )),
        (other, _) => Err(non_numeric(other)),
    }
}

fn non_numeric(value: &Value) -> HorizonError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::String(_) => "string",
        Value::Object(_) => "object",
        Value::Number(_) | Value::Array(_) => "value",
    };
    HorizonError::Validation(format!("inputs must be numeric, found {kind}"))
}
