/// Slide the non-empty values of `line` toward the front and merge each pair
/// of equal adjacent values exactly once, applying `combine` to the merged
/// value. A value produced by a merge never merges again in the same pass,
/// so `[2, 2, 4]` gives `[4, 4]` and `[2, 2, 2]` gives `[4, 2]`.
///
/// The result holds only the surviving values; trailing slots of the original
/// line are implicitly empty.
pub fn move_and_merge_equal<T, F>(line: &[Option<T>], combine: F) -> Vec<T>
where
    T: PartialEq + Copy,
    F: Fn(T) -> T,
{
    let compacted: Vec<T> = line.iter().filter_map(|v| *v).collect();

    let mut merged = Vec::with_capacity(compacted.len());
    let mut p = 0;
    while p < compacted.len() {
        if p + 1 < compacted.len() && compacted[p] == compacted[p + 1] {
            merged.push(combine(compacted[p]));
            p += 2;
        } else {
            merged.push(compacted[p]);
            p += 1;
        }
    }
    merged
}
