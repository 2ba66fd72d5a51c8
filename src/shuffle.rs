use rand::Rng;

/// Returns a uniformly random permutation of `items`, leaving the input
/// untouched. Linear-scan exchange shuffle: walk from the last index down to
/// 1, swapping each position with a uniform pick from [0, i].
pub fn shuffle<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
