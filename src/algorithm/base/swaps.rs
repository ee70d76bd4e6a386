pub type Swap = (usize, usize);


/// Swaps that turn permutation `from` into permutation `to` when applied in
/// order; both must order the same cities `0..n`.
pub fn swap_sequence(from: &[usize], to: &[usize]) -> Vec<Swap> {
    debug_assert_eq!(from.len(), to.len());
    let mut current = from.to_vec();
    let mut position = vec![0; current.len()];
    for (i, &city) in current.iter().enumerate() {
        position[city] = i;
    }
    let mut swaps = vec![];
    for i in 0..current.len() {
        if current[i] != to[i] {
            let j = position[to[i]];
            swaps.push((i, j));
            position[current[i]] = j;
            position[to[i]] = i;
            current.swap(i, j);
        }
    }
    swaps
}

pub fn apply(perm: &mut [usize], swaps: &[Swap]) {
    for &(i, j) in swaps {
        perm.swap(i, j);
    }
}

/// 把重複或超出範圍的城市換成缺少的城市，保留每個城市第一次出現的位置
pub fn repair(perm: &mut Vec<usize>, n: usize) {
    perm.resize(n, n);
    let mut seen = vec![false; n];
    let mut holes = vec![];
    for (i, &city) in perm.iter().enumerate() {
        if city < n && !seen[city] {
            seen[city] = true;
        } else {
            holes.push(i);
        }
    }
    let missing = (0..n).filter(|&city| !seen[city]);
    for (i, city) in holes.into_iter().zip(missing) {
        perm[i] = city;
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::tsp::is_permutation;

    #[test]
    fn it_reaches_target_permutation() {
        let from = vec![0, 1, 2, 3, 4];
        let to = vec![3, 4, 0, 2, 1];
        let swaps = swap_sequence(&from, &to);
        let mut perm = from.clone();
        apply(&mut perm, &swaps);
        assert_eq!(perm, to);
        assert!(swaps.len() < from.len());
        assert!(swap_sequence(&to, &to).is_empty());
    }
    #[test]
    fn it_repairs_duplicates() {
        let mut perm = vec![2, 2, 0, 7, 0];
        repair(&mut perm, 5);
        assert_eq!(perm, vec![2, 1, 0, 3, 4]);
        assert!(is_permutation(&perm, 5));
    }
    #[test]
    fn it_repairs_wrong_length() {
        let mut short = vec![1];
        repair(&mut short, 3);
        assert!(is_permutation(&short, 3));
        let mut long = vec![1, 0, 2, 1];
        repair(&mut long, 3);
        assert_eq!(long, vec![1, 0, 2]);
    }
}
