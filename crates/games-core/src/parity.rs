/// Parity of a permutation by inversion count: even iff the number of pairs
/// (i, j) with i < j and permutation[i] > permutation[j] is even. Works for
/// any sequence of distinct values.
pub fn is_even(permutation: &[u32]) -> bool {
    let mut inversions = 0usize;
    for i in 0..permutation.len() {
        for j in i + 1..permutation.len() {
            if permutation[i] > permutation[j] {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 0
}

/// Parity by cycle decomposition: a cycle of length k costs k - 1
/// transpositions, and the permutation is even iff the total is even.
/// `permutation` must hold every value in 1..=n exactly once.
///
/// Agrees with `is_even` on every valid permutation.
pub fn is_even_by_cycles(permutation: &[u32]) -> bool {
    transpositions(permutation) % 2 == 0
}

fn transpositions(permutation: &[u32]) -> usize {
    let n = permutation.len();

    // position[v] = 1-based index of value v in the sequence, i.e. the
    // permutation read as a function on 1..=n.
    let mut position = vec![0usize; n + 1];
    for (i, &value) in permutation.iter().enumerate() {
        let value = value as usize;
        debug_assert!(
            (1..=n).contains(&value) && position[value] == 0,
            "not a permutation of 1..={n}"
        );
        position[value] = i + 1;
    }

    let mut visited = vec![false; n + 1];
    let mut count = 0;
    for start in 1..=n {
        if visited[start] {
            continue;
        }
        let mut length = 0;
        let mut current = start;
        while !visited[current] {
            visited[current] = true;
            current = position[current];
            length += 1;
        }
        count += length - 1;
    }
    count
}
