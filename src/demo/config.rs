// Demo Configuration
// Range of key lengths to exercise, with command line overrides

use anyhow::{bail, ensure, Context, Result};

use crate::rsa::MIN_KEY_LENGTH;

/// Longest key the demo will generate; trial division slows down sharply past this
pub const MAX_DEMO_LENGTH: u32 = 32;

/// Configuration for a demo run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub min_length: u32,
    pub max_length: u32,
    pub check_known_vectors: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_KEY_LENGTH,
            max_length: 16,
            check_known_vectors: true,
        }
    }
}

impl DemoConfig {
    pub fn with_lengths(mut self, min_length: u32, max_length: u32) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    pub fn with_known_vectors(mut self, enabled: bool) -> Self {
        self.check_known_vectors = enabled;
        self
    }

    /// Build a config from positional `[MIN [MAX]]` arguments (program name excluded).
    /// A single argument sets both bounds.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let config = Self::default();

        let config = match args.as_slice() {
            [] => config,
            [only] => {
                let length = parse_length(only)?;
                config.with_lengths(length, length)
            }
            [min, max] => config.with_lengths(parse_length(min)?, parse_length(max)?),
            _ => bail!("usage: toy_rsa [MIN_LENGTH [MAX_LENGTH]]"),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_length <= self.max_length,
            "min length {} is greater than max length {}",
            self.min_length,
            self.max_length
        );
        ensure!(
            self.min_length >= MIN_KEY_LENGTH && self.max_length <= MAX_DEMO_LENGTH,
            "key lengths must lie in [{}, {}]",
            MIN_KEY_LENGTH,
            MAX_DEMO_LENGTH
        );
        Ok(())
    }
}

fn parse_length(arg: &str) -> Result<u32> {
    arg.parse::<u32>()
        .with_context(|| format!("invalid key length {:?}", arg))
}
