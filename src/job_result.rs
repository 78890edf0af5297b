use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Outcome or current state of a job, as shown by a status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobResult {
    Success,
    Failure,
    Running,
    Queued,
    Unstable,
    Aborted,
    NotBuilt,
    #[default]
    Unknown,
}

impl JobResult {
    pub const ALL: [JobResult; 8] = [
        JobResult::Success,
        JobResult::Failure,
        JobResult::Running,
        JobResult::Queued,
        JobResult::Unstable,
        JobResult::Aborted,
        JobResult::NotBuilt,
        JobResult::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobResult::Success => "success",
            JobResult::Failure => "failure",
            JobResult::Running => "running",
            JobResult::Queued => "queued",
            JobResult::Unstable => "unstable",
            JobResult::Aborted => "aborted",
            JobResult::NotBuilt => "not_built",
            JobResult::Unknown => "unknown",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, JobResult::Running)
    }
}

/// Decode a raw result value. Matching ignores case and surrounding
/// whitespace; anything unrecognised is `Unknown`.
pub fn decode_result_value(raw: &str) -> JobResult {
    match raw.trim().to_ascii_lowercase().as_str() {
        "success" => JobResult::Success,
        "failure" => JobResult::Failure,
        "running" => JobResult::Running,
        "queued" => JobResult::Queued,
        "unstable" => JobResult::Unstable,
        "aborted" => JobResult::Aborted,
        "not_built" => JobResult::NotBuilt,
        _ => JobResult::Unknown,
    }
}

impl fmt::Display for JobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobResult {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(decode_result_value(s))
    }
}

impl From<&str> for JobResult {
    fn from(value: &str) -> Self {
        decode_result_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_decode_to_themselves() {
        for result in JobResult::ALL {
            assert_eq!(decode_result_value(result.as_str()), result);
        }
    }

    #[test]
    fn decoding_ignores_case_and_padding() {
        assert_eq!(decode_result_value("RUNNING"), JobResult::Running);
        assert_eq!(decode_result_value("  Success "), JobResult::Success);
        assert_eq!(decode_result_value("Not_Built"), JobResult::NotBuilt);
    }

    #[test]
    fn unrecognised_values_are_unknown() {
        assert_eq!(decode_result_value(""), JobResult::Unknown);
        assert_eq!(decode_result_value("in progress"), JobResult::Unknown);
        assert_eq!(decode_result_value("not built"), JobResult::Unknown);
    }

    #[test]
    fn parse_never_fails() {
        let parsed: JobResult = "queued".parse().unwrap();
        assert_eq!(parsed, JobResult::Queued);
        let parsed: JobResult = "???".parse().unwrap();
        assert_eq!(parsed, JobResult::Unknown);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(JobResult::NotBuilt.to_string(), "not_built");
        assert!(JobResult::Running.is_running());
        assert!(!JobResult::Queued.is_running());
    }
}
