/// Candidate mantissas for a "nice" axis ceiling, in ascending order.
const NICE_STEPS: [f64; 6] = [1.5, 2.0, 3.0, 5.0, 7.0, 10.0];

/// Round a raw maximum up to a human-friendly axis ceiling.
///
/// Zero (or anything non-positive) yields 10, the minimum visible scale.
/// Only used to pick the axis top; never clips data.
pub fn nice_max(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 10.0;
    }

    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let normalized = value / magnitude;
    let step = NICE_STEPS
        .iter()
        .copied()
        .find(|&step| step >= normalized)
        .unwrap_or(10.0);

    step * magnitude
}

/// Thin a dense label array so a trend chart's x-axis stays readable.
///
/// Dropped slots become empty strings rather than being removed, so the
/// renderer's point spacing is unchanged.
pub fn sparsify_labels(labels: Vec<String>) -> Vec<String> {
    let keep_every = match labels.len() {
        0..=10 => return labels,
        11..=20 => 2,
        21..=30 => 3,
        _ => 5,
    };

    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| if i % keep_every == 0 { label } else { String::new() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("L{}", i)).collect()
    }

    #[test]
    fn test_nice_max_table() {
        assert_eq!(nice_max(0.0), 10.0);
        assert_eq!(nice_max(12.0), 15.0);
        assert_eq!(nice_max(95.0), 100.0);
        assert_eq!(nice_max(1.2), 1.5);
        assert_eq!(nice_max(40.0), 50.0);
        assert_eq!(nice_max(650.0), 700.0);
    }

    #[test]
    fn test_nice_max_never_below_input() {
        for v in [0.3, 1.0, 7.2, 33.0, 149.0, 9800.0] {
            assert!(nice_max(v) >= v, "nice_max({}) = {}", v, nice_max(v));
        }
    }

    #[test]
    fn test_short_label_array_unchanged() {
        assert_eq!(sparsify_labels(labels(8)), labels(8));
        assert_eq!(sparsify_labels(labels(10)), labels(10));
    }

    #[test]
    fn test_mid_density_keeps_every_other() {
        let result = sparsify_labels(labels(12));
        assert_eq!(result[0], "L0");
        assert_eq!(result[1], "");
        assert_eq!(result[2], "L2");
        assert_eq!(result.len(), 12);
    }

    #[test]
    fn test_twenty_five_keeps_every_third() {
        let result = sparsify_labels(labels(25));
        for (i, label) in result.iter().enumerate() {
            if i % 3 == 0 {
                assert_eq!(label, &format!("L{}", i));
            } else {
                assert_eq!(label, "");
            }
        }
    }

    #[test]
    fn test_dense_keeps_every_fifth() {
        let result = sparsify_labels(labels(40));
        assert_eq!(result.iter().filter(|l| !l.is_empty()).count(), 8);
        assert_eq!(result[5], "L5");
        assert_eq!(result[6], "");
    }
}
