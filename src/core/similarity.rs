use thiserror::Error;

/// The two vectors being compared have different lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Vector dimensions don't match: expected {expected}, got {actual}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Cosine similarity `dot(a, b) / (|a| * |b|)`, in [-1, 1]
///
/// Both vectors are divided by their largest magnitude first, so very large
/// components cannot overflow the sums. A zero-length vector has no direction
/// and scores 0.0 against anything, as does any input that still produces a
/// non-finite result.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, DimensionMismatch> {
    if a.len() != b.len() {
        return Err(DimensionMismatch {
            expected: b.len(),
            actual: a.len(),
        });
    }

    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return Ok(0.0);
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| (x / scale_a) * (y / scale_b)).sum();
    let norm_a_sq: f64 = a.iter().map(|x| (x / scale_a).powi(2)).sum();
    let norm_b_sq: f64 = b.iter().map(|y| (y / scale_b).powi(2)).sum();

    let similarity = dot / (norm_a_sq * norm_b_sq).sqrt();
    if !similarity.is_finite() {
        return Ok(0.0);
    }

    Ok(similarity.clamp(-1.0, 1.0))
}

#[inline]
fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let v = [8.0, 7.5, 6.0, 7.0, 8.0];
        assert_eq!(cosine_similarity(&v, &v).unwrap(), 1.0);
    }

    #[test]
    fn test_orthogonal_and_opposite() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]).unwrap(), 0.0);
        assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let a = [1.0, 4.0, 2.5, 0.5, 3.0];
        let b = [2.0, 1.0, 6.0, 7.0, 0.0];
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn test_scale_invariant() {
        let a = [5.0, 5.0, 5.0, 5.0, 5.0];
        let b = [8.0, 7.5, 6.0, 7.0, 8.0];
        let base = cosine_similarity(&a, &b).unwrap();

        for k in [0.001, 0.5, 3.0, 1000.0] {
            let scaled: Vec<f64> = b.iter().map(|x| x * k).collect();
            let s = cosine_similarity(&a, &scaled).unwrap();
            assert!((base - s).abs() < 1e-12, "scale {} changed score {} -> {}", k, base, s);
        }
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0; 3], &[1.0, 2.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_huge_components_stay_finite() {
        let huge = [1e308; 5];
        let profile = [8.0, 7.5, 6.0, 7.0, 8.0];

        let s = cosine_similarity(&huge, &profile).unwrap();
        let expected = cosine_similarity(&[1.0; 5], &profile).unwrap();
        assert!(s.is_finite());
        assert!((s - expected).abs() < 1e-12);

        let mixed = [f64::MAX, -f64::MAX, 1.0, 0.0, f64::MAX];
        let s = cosine_similarity(&mixed, &profile).unwrap();
        assert!(s.is_finite() && (-1.0..=1.0).contains(&s));
    }

    #[test]
    fn test_non_finite_input_scores_zero() {
        assert_eq!(cosine_similarity(&[f64::INFINITY, 1.0], &[1.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = cosine_similarity(&[1.0, 2.0, 3.0], &[1.0; 5]).unwrap_err();
        assert_eq!(err, DimensionMismatch { expected: 5, actual: 3 });
    }
}
