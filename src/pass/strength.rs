//! Entropy estimate for composed passwords.

use super::ComposedPassword;

/// Estimated guessing entropy in bits.
///
/// The embedded word is assumed known to an attacker up to which candidate
/// was picked, so only the fill and the pick itself count.
pub fn entropy_bits(pass: &ComposedPassword) -> f64 {
    let fill = (pass.left_fill_len() + pass.right_fill_len()) as f64;
    fill * log2(pass.pool_size()) + log2(pass.candidates())
}

/// Strength label for an entropy estimate.
pub fn label(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

fn log2(n: usize) -> f64 {
    if n <= 1 { 0.0 } else { (n as f64).log2() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{GenerationRequest, compose};
    use crate::rand::testing::Scripted;

    #[test]
    fn only_the_fill_and_pick_count() {
        let req = GenerationRequest::new(12, ["cats", "dogs"])
            .uppercase(false)
            .digits(false)
            .special(false);
        let pass = compose(&req, &mut Scripted::new(&[0])).unwrap();
        let expected = 8.0 * 26f64.log2() + 1.0;
        assert!((entropy_bits(&pass) - expected).abs() < 1e-9);
    }

    #[test]
    fn bare_word_has_no_entropy() {
        let req = GenerationRequest::new(8, ["elephant"]);
        let pass = compose(&req, &mut Scripted::new(&[0])).unwrap();
        assert_eq!(entropy_bits(&pass), 0.0);
        assert_eq!(label(0.0), "Weak");
    }

    #[test]
    fn labels() {
        assert_eq!(label(35.9), "Weak");
        assert_eq!(label(36.0), "Fair");
        assert_eq!(label(64.0), "Strong");
        assert_eq!(label(128.0), "Very Strong");
    }
}
