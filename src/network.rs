/*
 * SPDX-License-Identifier: MIT
 *
 * Permission is hereby granted, free of charge, to any person obtaining a
 * copy of this software and associated documentation files (the "Software"),
 * to deal in the Software without restriction, including without limitation
 * the rights to use, copy, modify, merge, publish, distribute, sublicense,
 * and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in
 * all copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL
 * THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
 * FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
 * DEALINGS IN THE SOFTWARE.
 */
use std::time::Duration;

use reqwest::{
    blocking::Client as HttpClient, blocking::ClientBuilder as HttpClientBuilder,
    header::HeaderValue, header::ACCEPT, header::CONTENT_TYPE, StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::debug;

pub use crate::IdracError;

pub const REDFISH_ENDPOINT: &str = "redfish/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug)]
pub struct ClientPoolBuilder {
    timeout: Duration,
    accept_invalid_certs: bool,
}

impl ClientPoolBuilder {
    /// Prevents the client from accepting self signed certificates and other
    /// invalid certificates.
    ///
    /// By default self signed certificates will be accepted, since iDRACs
    /// usually use those.
    pub fn reject_invalid_certs(mut self) -> ClientPoolBuilder {
        self.accept_invalid_certs = false;
        self
    }

    /// Overwrites the timeout that will be applied to every request
    pub fn timeout(mut self, timeout: Duration) -> ClientPoolBuilder {
        self.timeout = timeout;
        self
    }

    /// Builds the shared HTTP connection pool
    pub fn build(&self) -> Result<ClientPool, IdracError> {
        let builder = HttpClientBuilder::new();
        let http_client = builder
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout)
            .build()
            .unwrap();
        Ok(ClientPool { http_client })
    }
}

/// The endpoint that a Redfish client connects to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    /// Hostname or IP address of the controller
    pub host: String,
    /// Controller port. If absent the default HTTPS port 443 will be used
    pub port: Option<u16>,
    /// Controller username
    pub user: Option<String>,
    /// Controller password
    pub password: Option<String>,
}

/// One HTTP connection pool shared by every controller queried in a run.
#[derive(Debug, Clone)]
pub struct ClientPool {
    http_client: HttpClient,
}

impl ClientPool {
    /// Returns Builder for configuring the HTTP connection pool
    pub fn builder() -> ClientPoolBuilder {
        ClientPoolBuilder {
            timeout: DEFAULT_TIMEOUT,
            // iDRACs ship with a self-signed cert, so usually this has to be true
            accept_invalid_certs: true,
        }
    }

    /// Creates a client bound to one endpoint, sharing this pool's connections.
    pub fn client(&self, endpoint: Endpoint) -> RedfishClient {
        RedfishClient {
            endpoint,
            http_client: self.http_client.clone(),
        }
    }
}

/// A HTTP client which targets a single Redfish endpoint
pub struct RedfishClient {
    endpoint: Endpoint,
    http_client: HttpClient,
}

impl RedfishClient {
    /// GET an api path under `redfish/v1` and decode the JSON response.
    pub fn get<T>(&self, api: &str) -> Result<(StatusCode, T), IdracError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let url = match self.endpoint.port {
            Some(p) => format!(
                "https://{}:{}/{}/{}",
                self.endpoint.host, p, REDFISH_ENDPOINT, api
            ),
            None => format!(
                "https://{}/{}/{}",
                self.endpoint.host, REDFISH_ENDPOINT, api
            ),
        };
        debug!("TX GET {}", url);

        let mut req_b = self
            .http_client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(user) = &self.endpoint.user {
            req_b = req_b.basic_auth(user, self.endpoint.password.as_ref());
        }
        let response = req_b.send().map_err(|e| IdracError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let status_code = response.status();
        // read the body even if not status 2XX, because controllers give
        // useful error messages as JSON
        let response_body = response.text().map_err(|e| IdracError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        if response_body.is_empty() {
            debug!("RX {status_code}");
        } else {
            debug!("RX {status_code} {response_body}");
        }
        if !status_code.is_success() {
            return Err(IdracError::HTTPErrorCode { url, status_code });
        }
        if response_body.is_empty() {
            return Err(IdracError::NoContent { url });
        }
        match serde_json::from_str(&response_body) {
            Ok(v) => Ok((status_code, v)),
            Err(e) => Err(IdracError::JsonDeserializeError {
                url,
                body: response_body,
                source: e,
            }),
        }
    }
}
