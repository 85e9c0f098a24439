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

//! A minimal client for the Cloud Batch v1 REST API.

use super::model::{Job, ListJobsResponse, Operation};
use super::stub;
use google_cloud_auth::credentials::{Builder as CredentialsBuilder, CacheableResource, Credentials};
use google_cloud_gax::Result;
use google_cloud_gax::client_builder::Error as BuilderError;
use google_cloud_gax::error::Error;
use google_cloud_gax::error::rpc::Status;
use http::Extensions;
use std::sync::Arc;

const DEFAULT_HOST: &str = "https://batch.googleapis.com";

/// Implements a client for the Cloud Batch API.
///
/// # Example
/// ```no_run
/// # use cloud_snippets::batch::client::BatchService;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = BatchService::builder().with_tracing().build().await?;
/// let job = client.get_job("projects/p/locations/us-central1/jobs/j").await?;
/// println!("{job:?}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct BatchService {
    inner: Arc<dyn stub::dynamic::BatchService>,
}

impl BatchService {
    /// Returns a builder for [BatchService].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::BatchService + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Creates a job in `parent`, which has the form
    /// `projects/{project}/locations/{region}`.
    pub async fn create_job(
        &self,
        parent: impl Into<String>,
        job_id: impl Into<String>,
        job: Job,
    ) -> Result<Job> {
        self.inner.create_job(parent.into(), job_id.into(), job).await
    }

    pub async fn get_job(&self, name: impl Into<String>) -> Result<Job> {
        self.inner.get_job(name.into()).await
    }

    /// Returns one page of jobs. Use an empty `page_token` for the first page.
    pub async fn list_jobs(
        &self,
        parent: impl Into<String>,
        page_token: impl Into<String>,
    ) -> Result<ListJobsResponse> {
        self.inner.list_jobs(parent.into(), page_token.into()).await
    }

    /// Starts deleting a job. Poll the returned operation with
    /// [get_operation][Self::get_operation].
    pub async fn delete_job(&self, name: impl Into<String>) -> Result<Operation> {
        self.inner.delete_job(name.into()).await
    }

    pub async fn get_operation(&self, name: impl Into<String>) -> Result<Operation> {
        self.inner.get_operation(name.into()).await
    }
}

/// A builder for [BatchService].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    endpoint: Option<String>,
    credentials: Option<Credentials>,
    tracing: bool,
}

impl ClientBuilder {
    /// Sets the endpoint, the default is `https://batch.googleapis.com`.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Uses `v` instead of the Application Default Credentials.
    pub fn with_credentials<V: Into<Credentials>>(mut self, v: V) -> Self {
        self.credentials = Some(v.into());
        self
    }

    /// Emits a tracing span for each request.
    pub fn with_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    pub async fn build(self) -> google_cloud_gax::client_builder::Result<BatchService> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let cred = match self.credentials {
            Some(c) => c,
            None => CredentialsBuilder::default()
                .build()
                .map_err(BuilderError::cred)?,
        };
        let transport = Rest {
            client,
            cred,
            endpoint: self.endpoint.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        };
        if self.tracing {
            return Ok(BatchService::from_stub(Tracing { inner: transport }));
        }
        Ok(BatchService::from_stub(transport))
    }
}

/// Sends each request over HTTP and decodes the JSON response.
#[derive(Clone, Debug)]
struct Rest {
    client: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

impl Rest {
    fn url(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.endpoint)
    }

    async fn send<O>(&self, builder: reqwest::RequestBuilder) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let headers = match self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?
        {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                return Err(Error::io("the credentials returned no authentication headers"));
            }
        };
        let response = builder.headers(headers).send().await.map_err(Error::io)?;
        let status_code = response.status();
        let response_headers = response.headers().clone();
        let body = response.bytes().await.map_err(Error::io)?;
        if !status_code.is_success() {
            return Err(to_error(status_code.as_u16(), response_headers, body));
        }
        if body.is_empty() {
            return Ok(O::default());
        }
        serde_json::from_slice(&body).map_err(Error::deser)
    }
}

fn to_error(status_code: u16, headers: http::HeaderMap, body: bytes::Bytes) -> Error {
    match Status::try_from(&body) {
        Ok(status) => Error::service(status),
        Err(_) => Error::http(status_code, headers, body),
    }
}

impl stub::BatchService for Rest {
    async fn create_job(&self, parent: String, job_id: String, job: Job) -> Result<Job> {
        let builder = self
            .client
            .post(self.url(&format!("{parent}/jobs")))
            .query(&[("jobId", job_id)])
            .json(&job);
        self.send(builder).await
    }

    async fn get_job(&self, name: String) -> Result<Job> {
        self.send(self.client.get(self.url(&name))).await
    }

    async fn list_jobs(&self, parent: String, page_token: String) -> Result<ListJobsResponse> {
        let mut builder = self.client.get(self.url(&format!("{parent}/jobs")));
        if !page_token.is_empty() {
            builder = builder.query(&[("pageToken", page_token)]);
        }
        self.send(builder).await
    }

    async fn delete_job(&self, name: String) -> Result<Operation> {
        self.send(self.client.delete(self.url(&name))).await
    }

    async fn get_operation(&self, name: String) -> Result<Operation> {
        self.send(self.client.get(self.url(&name))).await
    }
}

/// Wraps each request in a tracing span.
#[derive(Clone, Debug)]
struct Tracing<T> {
    inner: T,
}

impl<T: stub::BatchService> stub::BatchService for Tracing<T> {
    #[tracing::instrument(level = "info", skip(self, job), err)]
    async fn create_job(&self, parent: String, job_id: String, job: Job) -> Result<Job> {
        self.inner.create_job(parent, job_id, job).await
    }

    #[tracing::instrument(level = "info", skip(self), err)]
    async fn get_job(&self, name: String) -> Result<Job> {
        self.inner.get_job(name).await
    }

    #[tracing::instrument(level = "info", skip(self), err)]
    async fn list_jobs(&self, parent: String, page_token: String) -> Result<ListJobsResponse> {
        self.inner.list_jobs(parent, page_token).await
    }

    #[tracing::instrument(level = "info", skip(self), err)]
    async fn delete_job(&self, name: String) -> Result<Operation> {
        self.inner.delete_job(name).await
    }

    #[tracing::instrument(level = "info", skip(self), err)]
    async fn get_operation(&self, name: String) -> Result<Operation> {
        self.inner.get_operation(name).await
    }
}
