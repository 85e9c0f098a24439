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

use tracing_subscriber::fmt::format::FmtSpan;

#[cfg(feature = "log-integration-tests")]
const MAX_LEVEL: ::tracing::Level = ::tracing::Level::INFO;
#[cfg(not(feature = "log-integration-tests"))]
const MAX_LEVEL: ::tracing::Level = ::tracing::Level::WARN;

/// Enables tracing for the current thread, until the guard is dropped.
///
/// The level is `WARN`, or `INFO` with the `log-integration-tests` feature.
pub fn enable_tracing() -> ::tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_max_level(MAX_LEVEL)
        .finish();

    ::tracing::subscriber::set_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_default() {
        let _guard = enable_tracing();
        let default = ::tracing::Dispatch::default();
        assert!(
            default.is::<tracing_subscriber::FmtSubscriber>(),
            "{default:?}"
        );
    }

    #[test]
    fn scoped_to_guard() {
        {
            let _guard = enable_tracing();
            assert!(::tracing::enabled!(::tracing::Level::WARN));
        }
        assert!(!::tracing::Dispatch::default().is::<tracing_subscriber::FmtSubscriber>());
    }
}
