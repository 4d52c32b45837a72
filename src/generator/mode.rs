use std::fmt;

/// The generation-mode flags as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub random_text: bool,
    pub random_number: bool,
    pub random_city: bool,
    pub random_credit_card: bool,
    pub incremental_text: bool,
    pub incremental_number: bool,
}

/// How one payload string is produced. Exactly one is active per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationMode {
    RandomText,
    RandomNumber,
    RandomCity,
    RandomCreditCard,
    IncrementalText,
    IncrementalNumber,
    #[default]
    Timestamped,
}

impl GenerationMode {
    /// First set flag wins, in this order: random-text, random-number,
    /// random-city, random-credit-card, incremental-text,
    /// incremental-number. No flag selects `Timestamped`.
    pub fn from_flags(flags: ModeFlags) -> Self {
        let ordered = [
            (flags.random_text, Self::RandomText),
            (flags.random_number, Self::RandomNumber),
            (flags.random_city, Self::RandomCity),
            (flags.random_credit_card, Self::RandomCreditCard),
            (flags.incremental_text, Self::IncrementalText),
            (flags.incremental_number, Self::IncrementalNumber),
        ];

        ordered
            .into_iter()
            .find_map(|(set, mode)| set.then_some(mode))
            .unwrap_or_default()
    }

}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RandomText => "random-text",
            Self::RandomNumber => "random-number",
            Self::RandomCity => "random-city",
            Self::RandomCreditCard => "random-credit-card",
            Self::IncrementalText => "incremental-text",
            Self::IncrementalNumber => "incremental-number",
            Self::Timestamped => "timestamped-text",
        };
        f.write_str(name)
    }
}
