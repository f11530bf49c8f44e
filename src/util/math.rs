/// Trial division over odd divisors up to `floor(sqrt(n))`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let limit = floor_sqrt(n as u64) as i64;
    let mut i = 3;
    while i <= limit {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

pub fn floor_sqrt(n: u64) -> u64 {
    // f64 is only an estimate above 2^52, fix it up in integers
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|square| square <= n) {
        root += 1;
    }
    root
}

pub fn perfect_sqrt(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    let root = floor_sqrt(n as u64) as i64;
    (root * root == n).then_some(root)
}
