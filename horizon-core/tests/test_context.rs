use half::bf16;
use serde_json::json;

use horizon_core::{ContextTensor, DType, ForecastParams, HorizonError, Tensor};

#[test]
fn test_flat_series() {
    let t = ContextTensor::from_json(&json!([1.0, 2.0, 3.0])).unwrap();
    assert_eq!(t.shape(), &[3]);
    assert_eq!(t.dtype(), DType::BF16);
    assert_eq!(t.to_f32_vec(), vec![1.0, 2.0, 3.0]);
    assert_eq!(t.size_bytes(), 6);
}

#[test]
fn test_values_rounded_to_bf16() {
    let t = ContextTensor::from_json(&json!([0.1, 1234.567, -3])).unwrap();
    let expected: Vec<bf16> = [0.1f64, 1234.567, -3.0]
        .iter()
        .map(|&x| bf16::from_f64(x))
        .collect();
    assert_eq!(t.data(), expected.as_slice());
    // 0.1 is not exactly representable in bf16
    assert_ne!(t.to_f32_vec()[0], 0.1f32);
    assert!((t.to_f32_vec()[0] - 0.1).abs() < 1e-3);
}

#[test]
fn test_nested_batch_keeps_shape() {
    let t = ContextTensor::from_json(&json!([[1, 2], [3, 4]])).unwrap();
    assert_eq!(t.shape(), &[2, 2]);
    assert_eq!(t.rank(), 2);
    assert_eq!(t.to_f32_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        t.rows_f32().unwrap(),
        vec![vec![1.0, 2.0], vec![3.0, 4.0]]
    );
}

#[test]
fn test_rank_three() {
    let t = ContextTensor::from_json(&json!([[[1], [2]], [[3], [4]], [[5], [6]]])).unwrap();
    assert_eq!(t.shape(), &[3, 2, 1]);
    assert_eq!(t.numel(), 6);
    assert!(t.rows_f32().is_none());
}

#[test]
fn test_scalar_is_rank_zero() {
    let t = ContextTensor::from_json(&json!(7.5)).unwrap();
    assert!(t.shape().is_empty());
    assert_eq!(t.to_f32_vec(), vec![7.5]);
}

#[test]
fn test_empty_arrays() {
    let t = ContextTensor::from_json(&json!([])).unwrap();
    assert_eq!(t.shape(), &[0]);
    assert!(t.is_empty());

    let t = ContextTensor::from_json(&json!([[], []])).unwrap();
    assert_eq!(t.shape(), &[2, 0]);
    assert!(t.is_empty());
}

#[test]
fn test_ragged_rejected() {
    for value in [
        json!([[1, 2], [3]]),
        json!([[1, 2], 3]),
        json!([1, [2]]),
        json!([[1], []]),
    ] {
        let err = ContextTensor::from_json(&value).unwrap_err();
        assert!(
            matches!(err, HorizonError::Validation(_)),
            "{value} should fail validation, got {err:?}"
        );
    }
}

/// Nesting `depth` levels deep where only the first element at each level is
/// a 1000-wide array and its siblings are plain numbers. The first-element
/// shape is `[1000; depth + 1]` while the payload stays a few KB.
fn ragged_chain(depth: usize) -> serde_json::Value {
    let mut value = json!(vec![0; 1000]);
    for _ in 0..depth {
        let mut items = vec![value];
        items.extend(std::iter::repeat(json!(0)).take(999));
        value = serde_json::Value::Array(items);
    }
    value
}

#[test]
fn test_deep_ragged_chain_rejected_without_allocating_claimed_shape() {
    // Depth 5 claims 10^18 elements; depth 6 and up overflow usize.
    for depth in 1..=8 {
        let err = ContextTensor::from_json(&ragged_chain(depth)).unwrap_err();
        assert!(
            matches!(err, HorizonError::Validation(_)),
            "depth {depth} should fail validation, got {err:?}"
        );
    }
}

#[test]
fn test_non_numeric_rejected() {
    for value in [
        json!("1.0"),
        json!(null),
        json!([1, "2"]),
        json!([true, false]),
        json!([1, null]),
        json!({"a": 1}),
        json!([[1, 2], [3, {"x": 4}]]),
    ] {
        let err = ContextTensor::from_json(&value).unwrap_err();
        assert!(
            matches!(err, HorizonError::Validation(_)),
            "{value} should fail validation, got {err:?}"
        );
    }
}

#[test]
fn test_forecast_params_fixed_policy() {
    let params = ForecastParams::default();
    assert_eq!(params, ForecastParams::FIXED);
    assert_eq!(params.prediction_length, 12);
    assert_eq!(params.num_samples, 20);
}
