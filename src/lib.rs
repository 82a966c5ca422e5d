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
use std::{fmt, fs, path::Path};

pub mod collector;
mod error;
mod idrac;
pub mod model;
mod network;
pub mod resolve;

pub use collector::{CollectorConfig, HostRecord};
pub use error::IdracError;
pub use idrac::Idrac;
pub use model::system::PowerState;
pub use network::{ClientPool, ClientPoolBuilder, Endpoint, REDFISH_ENDPOINT};
pub use resolve::{DnsResolver, Resolve};

/// Interface to a fleet's management controllers. All calls make one or more
/// HTTPS requests to the named controller.
pub trait Management: Send + Sync {
    /// Quick power/health summary of the system behind a controller.
    fn summary(&self, controller: &str, cred: &Credential)
        -> Result<SystemSummary, IdracError>;

    /// Factory-assigned MAC address of the named adapter, as reported by the
    /// controller. `adapter` is a port identifier such as `NIC.Integrated.1-1-1`.
    fn permanent_mac(&self, controller: &str, cred: &Credential, adapter: &str)
        -> Result<String, IdracError>;
}

/// Login account shared by every controller in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub user: String,
    pub password: String,
}

impl Credential {
    /// Read the password from a plain-text file. The whole trimmed file
    /// content is the password; an empty file is an error, not an empty
    /// password.
    pub fn from_file(path: impl AsRef<Path>, user: &str) -> Result<Credential, IdracError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| IdracError::CredentialFile {
            path: path.display().to_string(),
            source: e,
        })?;
        let password = content.trim();
        if password.is_empty() {
            return Err(IdracError::EmptyCredential {
                path: path.display().to_string(),
            });
        }
        Ok(Credential {
            user: user.to_string(),
            password: password.to_string(),
        })
    }
}

/// Basic information about one system, queried out of band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSummary {
    /// Controller the data came from (hostname or IP).
    pub controller: String,
    /// Host name the operating system registered with the controller.
    pub hostname: String,
    /// Dell service tag.
    pub service_tag: String,
    pub power: String,
    pub health: String,
}

impl fmt::Display for SystemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} health {}",
            self.controller, self.hostname, self.service_tag, self.power, self.health
        )
    }
}
