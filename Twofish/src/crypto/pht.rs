/// Pseudo-Hadamard transform: `(a + b, a + 2b)` modulo 2^32.
pub fn pht(a: u32, b: u32) -> (u32, u32) {
    let a_prime = a.wrapping_add(b);
    let b_prime = a.wrapping_add(b.wrapping_mul(2));
    (a_prime, b_prime)
}
