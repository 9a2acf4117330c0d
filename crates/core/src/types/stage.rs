use std::fmt;

/// One step of a generator lifecycle, in acquisition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Create,
    Start,
    Enqueue,
    Wait,
    Stop,
    Destroy,
}

impl Stage {
    /// All stages in the order a successful lifecycle visits them
    pub const ALL: [Stage; 6] = [
        Stage::Create,
        Stage::Start,
        Stage::Enqueue,
        Stage::Wait,
        Stage::Stop,
        Stage::Destroy,
    ];

    /// Stable lowercase name used in logs and messages
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Create => "create",
            Stage::Start => "start",
            Stage::Enqueue => "enqueue",
            Stage::Wait => "wait",
            Stage::Stop => "stop",
            Stage::Destroy => "destroy",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_are_ordered_by_acquisition() {
        let mut sorted = Stage::ALL;
        sorted.sort();
        assert_eq!(sorted, Stage::ALL);
        assert!(Stage::Enqueue < Stage::Stop);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Wait.to_string(), "wait");
        assert_eq!(Stage::Destroy.as_str(), "destroy");
    }
}
