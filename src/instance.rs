//! Knapsack problem instances.
//!
//! A [`ProblemInstance`] is the immutable input of a run: an ordered list of
//! [`Item`]s and a weight capacity. Gene `i` of every chromosome refers to
//! `items[i]`.

use crate::error::KnapsackError;
use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;

/// One candidate item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Identifier shown in reports (1-based for generated instances).
    pub id: usize,
    pub weight: u64,
    pub value: u64,
}

/// Items plus capacity. Never mutated once a run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemInstance {
    pub items: Vec<Item>,
    pub capacity: u64,
}

impl ProblemInstance {
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    /// Builds an instance from parallel `(weight, value)` pairs, numbering
    /// items from 1.
    pub fn from_pairs(pairs: &[(u64, u64)], capacity: u64) -> Self {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(i, &(weight, value))| Item {
                id: i + 1,
                weight,
                value,
            })
            .collect();
        Self { items, capacity }
    }

    /// Generates a random instance.
    ///
    /// Ids run `1..=num_items`; weights and values are drawn uniformly from
    /// the configured inclusive ranges.
    ///
    /// # Panics
    /// Panics if either range is empty (see [`InstanceConfig::validate`]).
    pub fn random<R: Rng>(config: &InstanceConfig, rng: &mut R) -> Self {
        let items = (1..=config.num_items)
            .map(|id| Item {
                id,
                weight: rng.random_range(config.weight_range.clone()),
                value: rng.random_range(config.value_range.clone()),
            })
            .collect();
        Self {
            items,
            capacity: config.capacity,
        }
    }

    /// Number of items, which is also the chromosome length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for ProblemInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Item\tWeight\tValue")?;
        for item in &self.items {
            writeln!(f, "{}\t{}\t{}", item.id, item.weight, item.value)?;
        }
        write!(f, "Knapsack capacity: {}", self.capacity)
    }
}

/// Settings for random instance generation.
///
/// Defaults reproduce the reference setup: 40 items, capacity 100,
/// weights in `1..=15`, values in `1..=100`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceConfig {
    pub num_items: usize,
    pub capacity: u64,
    pub weight_range: RangeInclusive<u64>,
    pub value_range: RangeInclusive<u64>,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            num_items: 40,
            capacity: 100,
            weight_range: 1..=15,
            value_range: 1..=100,
        }
    }
}

impl InstanceConfig {
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_weight_range(mut self, range: RangeInclusive<u64>) -> Self {
        self.weight_range = range;
        self
    }

    pub fn with_value_range(mut self, range: RangeInclusive<u64>) -> Self {
        self.value_range = range;
        self
    }

    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.num_items == 0 {
            return Err(KnapsackError::InvalidConfig(
                "num_items must be at least 1".into(),
            ));
        }
        if self.capacity == 0 {
            return Err(KnapsackError::InvalidConfig(
                "capacity must be at least 1".into(),
            ));
        }
        if self.weight_range.is_empty() {
            return Err(KnapsackError::InvalidConfig("weight_range is empty".into()));
        }
        if self.value_range.is_empty() {
            return Err(KnapsackError::InvalidConfig("value_range is empty".into()));
        }
        Ok(())
    }
}
