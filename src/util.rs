use num_traits::Float;


/// Greatest common divisor, Euclidean algorithm.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
  while b != 0 {
    let t = b;
    b = a % b;
    a = t;
  }
  a
}

/// Linear re-mapping of `value` from `from` onto `to`. The value is not clamped.
pub fn map_range<T: Float>(value: T, from: (T, T), to: (T, T)) -> T {
  to.0 + (value - from.0) / (from.1 - from.0) * (to.1 - to.0)
}

/// 32-bit string hash over UTF-16 code units, `h = h * 31 + unit` with wrapping.
pub fn hash_string(s: &str) -> i32 {
  s.encode_utf16()
    .fold(0i32, |hash, unit| hash
      .wrapping_shl(5)
      .wrapping_sub(hash)
      .wrapping_add(unit as i32))
}

#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);
