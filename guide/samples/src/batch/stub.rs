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

//! Traits to mock [BatchService][super::client::BatchService].

use super::model::{Job, ListJobsResponse, Operation};
use google_cloud_gax::Result;

/// Defines the trait used to implement [super::client::BatchService].
///
/// Application developers may need to implement this trait to mock
/// `client::BatchService`. In other use-cases, application developers only
/// use `client::BatchService` and need not be concerned with this trait or
/// its implementations.
pub trait BatchService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::BatchService::create_job].
    fn create_job(
        &self,
        parent: String,
        job_id: String,
        job: Job,
    ) -> impl std::future::Future<Output = Result<Job>> + Send;

    /// Implements [super::client::BatchService::get_job].
    fn get_job(&self, name: String) -> impl std::future::Future<Output = Result<Job>> + Send;

    /// Implements [super::client::BatchService::list_jobs].
    fn list_jobs(
        &self,
        parent: String,
        page_token: String,
    ) -> impl std::future::Future<Output = Result<ListJobsResponse>> + Send;

    /// Implements [super::client::BatchService::delete_job].
    fn delete_job(
        &self,
        name: String,
    ) -> impl std::future::Future<Output = Result<Operation>> + Send;

    /// Implements [super::client::BatchService::get_operation].
    fn get_operation(
        &self,
        name: String,
    ) -> impl std::future::Future<Output = Result<Operation>> + Send;
}

pub(crate) mod dynamic {
    use super::{Job, ListJobsResponse, Operation, Result};

    /// An object-safe version of [super::BatchService].
    #[async_trait::async_trait]
    pub trait BatchService: std::fmt::Debug + Send + Sync {
        async fn create_job(&self, parent: String, job_id: String, job: Job) -> Result<Job>;
        async fn get_job(&self, name: String) -> Result<Job>;
        async fn list_jobs(&self, parent: String, page_token: String) -> Result<ListJobsResponse>;
        async fn delete_job(&self, name: String) -> Result<Operation>;
        async fn get_operation(&self, name: String) -> Result<Operation>;
    }

    #[async_trait::async_trait]
    impl<T: super::BatchService> BatchService for T {
        async fn create_job(&self, parent: String, job_id: String, job: Job) -> Result<Job> {
            T::create_job(self, parent, job_id, job).await
        }

        async fn get_job(&self, name: String) -> Result<Job> {
            T::get_job(self, name).await
        }

        async fn list_jobs(&self, parent: String, page_token: String) -> Result<ListJobsResponse> {
            T::list_jobs(self, parent, page_token).await
        }

        async fn delete_job(&self, name: String) -> Result<Operation> {
            T::delete_job(self, name).await
        }

        async fn get_operation(&self, name: String) -> Result<Operation> {
            T::get_operation(self, name).await
        }
    }
}
