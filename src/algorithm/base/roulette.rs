use rand::Rng;


/// 依權重隨機挑選一個索引；權重和為零或非有限值時回傳 `None`，由呼叫端決定退路
pub fn spin<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let sum: f64 = weights.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        return None;
    }
    let rand_f = rng.gen_range(0.0..sum);
    let mut accumulation = 0.0;
    let mut last = None;
    for (i, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        accumulation += weight;
        last = Some(i);
        if accumulation > rand_f {
            return last;
        }
    }
    // rounding may leave rand_f just above the accumulated sum
    last
}
