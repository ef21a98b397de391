/// Divide `total` cells among entries in proportion to `weights`.
///
/// Each entry first receives `floor(total * weight / sum)`. The cells lost to
/// flooring are then handed out one at a time, in entry order, to entries
/// with a non-zero weight until none are left. The result always sums to
/// `total` unless every weight is zero, in which case every entry gets zero.
pub fn partition(total: u32, weights: &[u32]) -> Vec<u32> {
    let sum: u64 = weights.iter().map(|w| u64::from(*w)).sum();
    if sum == 0 {
        return vec![0; weights.len()];
    }
    let mut ret: Vec<u32> = weights
        .iter()
        .map(|w| {
            let share = u64::from(total) * u64::from(*w) / sum;
            // share <= total, so this never truncates
            u32::try_from(share).unwrap_or(total)
        })
        .collect();

    let used: u64 = ret.iter().map(|v| u64::from(*v)).sum();
    let mut left = u64::from(total).saturating_sub(used);
    while left > 0 {
        for (i, w) in weights.iter().enumerate() {
            if left == 0 {
                break;
            }
            if *w > 0 {
                ret[i] += 1;
                left -= 1;
            }
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tpartition() {
        assert_eq!(partition(98, &[1, 1, 2]), vec![25, 24, 49]);
        assert_eq!(partition(10, &[1, 1, 1]), vec![4, 3, 3]);
        assert_eq!(partition(11, &[1, 1, 1]), vec![4, 4, 3]);
        assert_eq!(partition(0, &[1, 2]), vec![0, 0]);
        assert_eq!(partition(10, &[0, 0]), vec![0, 0]);
        assert_eq!(partition(10, &[]), Vec::<u32>::new());
        // Zero weights never receive remainder cells
        assert_eq!(partition(10, &[0, 1, 0, 2]), vec![0, 4, 0, 6]);
        assert_eq!(partition(5, &[0, 1, 0, 1]), vec![0, 3, 0, 2]);
    }

    proptest! {
        #[test]
        fn conserves_total(total in 0u32..10_000, weights in prop::collection::vec(1u32..100, 1..10)) {
            let parts = partition(total, &weights);
            prop_assert_eq!(parts.len(), weights.len());
            prop_assert_eq!(parts.iter().sum::<u32>(), total);
        }

        #[test]
        fn equal_weights_are_fair(total in 0u32..10_000, n in 1usize..10) {
            let parts = partition(total, &vec![3; n]);
            let base = total / n as u32;
            let extra = (total % n as u32) as usize;
            for (i, p) in parts.iter().enumerate() {
                let want = if i < extra { base + 1 } else { base };
                prop_assert_eq!(*p, want);
            }
        }
    }
}
