use crate::constants::DEFAULT_PORTS;
use once_cell::sync::Lazy;
use std::{fmt, ops::RangeInclusive, str::FromStr};

static DEFAULT_PORT_SET: Lazy<PortSet> = Lazy::new(|| PortSet::from_ranges([DEFAULT_PORTS]));

/// Set of TCP ports, written as comma separated ports and ranges
/// (`"1024-65535"`, `"80,443,8000-8100"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSet {
    ranges: Vec<RangeInclusive<u16>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSetParseError {
    InvalidPort(String),
    InvertedRange { start: u16, end: u16 },
}

impl fmt::Display for PortSetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortSetParseError::InvalidPort(text) => write!(f, "invalid port: {:?}", text),
            PortSetParseError::InvertedRange { start, end } => {
                write!(f, "range start {} is above its end {}", start, end)
            }
        }
    }
}

impl std::error::Error for PortSetParseError {}

impl PortSet {
    pub fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = RangeInclusive<u16>>,
    {
        Self {
            ranges: ranges.into_iter().collect(),
        }
    }

    pub fn contains(&self, port: u16) -> bool {
        self.ranges.iter().any(|range| range.contains(&port))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[RangeInclusive<u16>] {
        &self.ranges
    }

    fn parse_port(text: &str) -> Result<u16, PortSetParseError> {
        text.trim()
            .parse()
            .map_err(|_| PortSetParseError::InvalidPort(text.trim().to_string()))
    }
}

impl Default for PortSet {
    fn default() -> Self {
        DEFAULT_PORT_SET.clone()
    }
}

impl FromStr for PortSet {
    type Err = PortSetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ranges = Vec::new();

        for part in s.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            let range = match part.split_once('-') {
                Some((start, end)) => {
                    let start = Self::parse_port(start)?;
                    let end = Self::parse_port(end)?;
                    if start > end {
                        return Err(PortSetParseError::InvertedRange { start, end });
                    }
                    start..=end
                }
                None => {
                    let port = Self::parse_port(part)?;
                    port..=port
                }
            };
            ranges.push(range);
        }

        Ok(Self { ranges })
    }
}

impl fmt::Display for PortSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}-{}", range.start(), range.end())?;
            }
        }
        Ok(())
    }
}
