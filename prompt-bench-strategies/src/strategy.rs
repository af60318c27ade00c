use serde::{Deserialize, Serialize};

use prompt_bench_core::CoreError;

/// The closed set of prompting strategies.
///
/// `ALL` fixes the registration order (zero_shot, few_shot, cot); batch runs
/// iterate in this order so reports stay deterministic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    ZeroShot,
    FewShot,
    #[serde(rename = "cot")]
    ChainOfThought,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::ZeroShot, Self::FewShot, Self::ChainOfThought];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ZeroShot => "zero_shot",
            Self::FewShot => "few_shot",
            Self::ChainOfThought => "cot",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero_shot" => Ok(Self::ZeroShot),
            "few_shot" => Ok(Self::FewShot),
            "cot" => Ok(Self::ChainOfThought),
            other => Err(CoreError::Configuration(format!(
                "unknown strategy: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order() {
        let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["zero_shot", "few_shot", "cot"]);
    }

    #[test]
    fn test_parse_round_trip() {
        for strategy in Strategy::ALL {
            let parsed: Strategy = strategy.name().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "one_shot".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }
}
