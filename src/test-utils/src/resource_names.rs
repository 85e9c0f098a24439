// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helper functions and types to generate random resource names.
//!
//! The integration tests create real resources. Random names avoid
//! collisions between concurrent runs, and the common prefix makes leaked
//! resources easy to find and garbage collect.

use rand::{
    Rng,
    distr::{Alphanumeric, Distribution, Uniform},
};

/// A common prefix for resource ids.
pub const PREFIX: &str = "rust-snippets-";

/// Like [PREFIX], for services that reject `-` in ids.
pub const UNDERSCORE_PREFIX: &str = "rust_snippets_";

/// Compute Engine names follow RFC 1035.
const COMPUTE_NAME_LENGTH: usize = 63;

const WORKFLOW_ID_LENGTH: usize = 64;

/// Dataset ids may be longer, but shorter ids are easier to read.
const DATASET_ID_LENGTH: usize = 48;

/// Batch and Cloud Run job ids.
const JOB_ID_LENGTH: usize = 63;

/// Generate a random workflow id.
///
/// Workflow ids start with a letter, and contain letters, numbers, `-` and
/// `_`.
pub fn random_workflow_id() -> String {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(WORKFLOW_ID_LENGTH - PREFIX.len())
        .map(char::from)
        .collect();
    format!("{PREFIX}{id}")
}

/// Generate a random VM instance name.
pub fn random_vm_id() -> String {
    random_compute_name("vm-")
}

/// Generate a random firewall rule name.
pub fn random_firewall_name() -> String {
    random_compute_name("fw-")
}

/// Generate a random BigQuery dataset id.
///
/// Dataset ids contain only letters, numbers and `_`.
pub fn random_dataset_id() -> String {
    let id = LowercaseAlphanumeric.random_string(DATASET_ID_LENGTH - UNDERSCORE_PREFIX.len());
    format!("{UNDERSCORE_PREFIX}{id}")
}

/// Generate a random job id, valid for Cloud Batch and Cloud Run.
pub fn random_job_id() -> String {
    let id = LowercaseAlphanumeric.random_string(JOB_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

fn random_compute_name(kind: &str) -> String {
    let len = COMPUTE_NAME_LENGTH - PREFIX.len() - kind.len();
    let id = LowercaseAlphanumeric.random_string(len);
    format!("{PREFIX}{kind}{id}")
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
///
/// # Example
/// ```
/// use snippets_test_utils::resource_names::LowercaseAlphanumeric;
/// let got: String = LowercaseAlphanumeric.random_string(32);
/// assert_eq!(got.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use test_case::test_case;

    #[test_case(random_vm_id(), COMPUTE_NAME_LENGTH; "vm")]
    #[test_case(random_firewall_name(), COMPUTE_NAME_LENGTH; "firewall")]
    #[test_case(random_job_id(), JOB_ID_LENGTH; "job")]
    fn rfc1035(got: String, max: usize) -> anyhow::Result<()> {
        assert!(got.len() <= max, "{got} has more than {max} characters");
        let suffix = got
            .strip_prefix(PREFIX)
            .expect("{got} should start with {PREFIX}");
        is_rfc1035_suffix(suffix)?;
        assert!(
            got.starts_with(|c: char| c.is_ascii_lowercase()),
            "{got} should start with a letter"
        );
        Ok(())
    }

    #[test]
    fn compute_names_differ() {
        assert_ne!(random_vm_id(), random_vm_id());
        assert!(random_vm_id().starts_with("rust-snippets-vm-"));
        assert!(random_firewall_name().starts_with("rust-snippets-fw-"));
    }

    #[test]
    fn workflow_id() {
        let got = random_workflow_id();
        assert!(
            got.len() <= WORKFLOW_ID_LENGTH,
            "{got} has more than {WORKFLOW_ID_LENGTH} characters"
        );
        let suffix = got
            .strip_prefix(PREFIX)
            .expect("{got} should start with {PREFIX}");
        assert!(
            suffix.chars().all(|c| c.is_ascii_alphanumeric()),
            "the suffix should be alphanumeric: {suffix}"
        );
    }

    #[test]
    fn dataset_id() {
        let got = random_dataset_id();
        assert_eq!(got.len(), DATASET_ID_LENGTH, "{got}");
        assert!(
            got.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "{got} should only contain letters, numbers and underscores"
        );
        let suffix = got
            .strip_prefix(UNDERSCORE_PREFIX)
            .expect("{got} should start with {UNDERSCORE_PREFIX}");
        let test = is_ascii_lowercase_alphanumeric(suffix);
        assert!(test.is_ok(), "{test:?}");
    }

    #[test]
    fn lowercase_string() {
        let got = LowercaseAlphanumeric.random_string(128);
        assert_eq!(got.len(), 128, "{got:?}");
        let test = is_ascii_lowercase_alphanumeric(&got);
        assert!(test.is_ok(), "{test:?}");
    }

    fn is_rfc1035_suffix(got: &str) -> anyhow::Result<()> {
        for (idx, c) in got.chars().enumerate() {
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' {
                bail!("character at {idx} ({c}) is not valid in an RFC 1035 name: {got}");
            }
        }
        if got.ends_with('-') {
            bail!("{got} cannot end with a dash");
        }
        Ok(())
    }

    fn is_ascii_lowercase_alphanumeric(got: &str) -> anyhow::Result<()> {
        for (idx, c) in got.chars().enumerate() {
            if !c.is_ascii() {
                bail!("character at {idx} ({c}) is not ASCII in {got}")
            }
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() {
                bail!("character at {idx} ({c}) is not in expected character class in {got}");
            }
        }
        Ok(())
    }
}
