//! C3 linearization of a type's ancestors.

/// Compute the C3 linearization for `head`.
///
/// `base_orders[i]` must be the linearization of `bases[i]`. Returns `None`
/// when the bases admit no order that keeps every local precedence list and
/// every base's own order monotonic.
pub fn linearize<T: Copy + Eq>(head: T, bases: &[T], base_orders: &[Vec<T>]) -> Option<Vec<T>> {
    let mut sequences: Vec<&[T]> = base_orders
        .iter()
        .map(Vec::as_slice)
        .filter(|order| !order.is_empty())
        .collect();
    if !bases.is_empty() {
        sequences.push(bases);
    }

    let mut offsets = vec![0usize; sequences.len()];
    let mut result = vec![head];

    loop {
        let heads = sequences
            .iter()
            .zip(&offsets)
            .filter_map(|(seq, &offset)| seq.get(offset).copied());

        let mut exhausted = true;
        let mut chosen = None;
        for candidate in heads {
            exhausted = false;
            let in_some_tail = sequences
                .iter()
                .zip(&offsets)
                .any(|(seq, &offset)| {
                    seq.get(offset + 1..)
                        .is_some_and(|tail| tail.contains(&candidate))
                });
            if !in_some_tail {
                chosen = Some(candidate);
                break;
            }
        }

        if exhausted {
            return Some(result);
        }
        let next = chosen?;
        result.push(next);
        for (seq, offset) in sequences.iter().zip(offsets.iter_mut()) {
            if seq.get(*offset) == Some(&next) {
                *offset += 1;
            }
        }
    }
}
