//! Synthetic credit-card numbers.
//!
//! Numbers have a real network prefix, the network's length, and a valid
//! Luhn check digit. They are not tied to any account.

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
}

impl CardNetwork {
    /// Issuer prefixes. A trailing `%` is one random digit in 1..=9.
    fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Visa => &["4"],
            Self::Mastercard => &[
                "51", "52", "53", "54", "55", "222%", "223", "224", "225", "226", "227", "228",
                "229", "23", "24", "25", "26", "270", "271", "2720",
            ],
            Self::Amex => &["34", "37"],
        }
    }

    /// Total digits including the check digit.
    pub fn length(self) -> usize {
        match self {
            Self::Visa | Self::Mastercard => 16,
            Self::Amex => 15,
        }
    }
}

/// Draws a network by weight (50% Visa, 40% Mastercard, 10% Amex) and a
/// number on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardNumberGenerator;

impl CardNumberGenerator {
    pub fn pick_network<R: Rng + ?Sized>(&self, rng: &mut R) -> CardNetwork {
        match rng.gen_range(1..=10) {
            1..=5 => CardNetwork::Visa,
            6..=9 => CardNetwork::Mastercard,
            _ => CardNetwork::Amex,
        }
    }

    pub fn number<R: Rng + ?Sized>(&self, rng: &mut R, network: CardNetwork) -> String {
        let prefix = network
            .prefixes()
            .choose(rng)
            .copied()
            .unwrap_or("4");

        let mut digits: Vec<u8> = Vec::with_capacity(network.length());
        for c in prefix.chars() {
            match c {
                '%' => digits.push(rng.gen_range(1..=9)),
                d => digits.extend(d.to_digit(10).map(|d| d as u8)),
            }
        }
        while digits.len() < network.length() - 1 {
            digits.push(rng.gen_range(0..=9));
        }
        digits.push(luhn_check_digit(&digits));

        digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let network = self.pick_network(rng);
        self.number(rng, network)
    }
}

/// Check digit that makes `body` followed by it pass the Luhn test.
pub fn luhn_check_digit(body: &[u8]) -> u8 {
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Luhn validation over an all-digit string.
pub fn luhn_valid(number: &str) -> bool {
    let digits: Option<Vec<u8>> = number
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    match digits {
        Some(digits) if digits.len() > 1 => {
            let (body, check) = digits.split_at(digits.len() - 1);
            luhn_check_digit(body) == check[0]
        }
        _ => false,
    }
}
