use chrono::{DateTime, Local};
use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{SeedableRng, seq::SliceRandom};

use super::card::CardNumberGenerator;
use super::{GenerationMode, format_timestamp};

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produces one payload string per call according to a [`GenerationMode`].
///
/// Generic over the RNG so tests can run against a seeded one.
#[derive(Debug)]
pub struct PayloadGenerator<R = StdRng> {
    mode: GenerationMode,
    rng: R,
    cards: CardNumberGenerator,
}

impl PayloadGenerator<StdRng> {
    pub fn new(mode: GenerationMode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }
}

impl<R: Rng> PayloadGenerator<R> {
    pub fn with_rng(mode: GenerationMode, rng: R) -> Self {
        Self {
            mode,
            rng,
            cards: CardNumberGenerator,
        }
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Payload for run counter `counter` (starts at 1) at time `now`.
    pub fn generate(&mut self, counter: u64, now: &DateTime<Local>) -> String {
        match self.mode {
            GenerationMode::RandomText => self.random_text(),
            GenerationMode::RandomNumber => self.rng.gen_range(1..=99).to_string(),
            GenerationMode::RandomCity => self.random_city(),
            GenerationMode::RandomCreditCard => {
                format!("credit_card_number:{}", self.cards.generate(&mut self.rng))
            }
            GenerationMode::IncrementalText => self.alphanumeric(counter as usize),
            GenerationMode::IncrementalNumber => counter.to_string(),
            GenerationMode::Timestamped => {
                format!("This is a test message at {}.", format_timestamp(now))
            }
        }
    }

    /// 1-10 space-separated alphanumeric words of 1-10 chars, then a period.
    fn random_text(&mut self) -> String {
        let count = self.rng.gen_range(1..=10);
        let words: Vec<String> = (0..count)
            .map(|_| {
                let len = self.rng.gen_range(1..=10);
                self.alphanumeric(len)
            })
            .collect();
        format!("{}.", words.join(" "))
    }

    /// `{"<Name>": [<lon>, <lat>]}` with lon in [120, 140], lat in [20, 40].
    fn random_city(&mut self) -> String {
        let len = self.rng.gen_range(2..=10);
        let mut name = String::with_capacity(len);
        for i in 0..len {
            let c = char::from(*ASCII_LETTERS.choose(&mut self.rng).unwrap_or(&b'a'));
            if i == 0 {
                name.push(c.to_ascii_uppercase());
            } else {
                name.push(c.to_ascii_lowercase());
            }
        }
        let lon: f64 = self.rng.gen_range(120.0..=140.0);
        let lat: f64 = self.rng.gen_range(20.0..=40.0);
        // {:?} keeps the decimal point on whole numbers
        format!("{{\"{name}\": [{lon:?}, {lat:?}]}}")
    }

    fn alphanumeric(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}
