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
use std::{fmt, net::IpAddr};

use tracing::debug;

use crate::{resolve::Resolve, Credential, Management};

/// One inventory pass over a contiguous range of host indexes.
///
/// Every value the pass depends on is explicit here; nothing is baked into
/// control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// First host index, inclusive.
    pub first: u32,
    /// Last host index, inclusive.
    pub last: u32,
    pub host_prefix: String,
    pub domain: String,
    /// Prepended to a host name to get its controller's name.
    pub controller_prefix: String,
    /// Port identifier of the adapter whose permanent MAC is collected.
    pub adapter: String,
    pub with_summary: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            first: 2,
            last: 11,
            host_prefix: "matlab".to_string(),
            domain: "nmrbox.org".to_string(),
            controller_prefix: "idrac-".to_string(),
            adapter: "NIC.Integrated.1-1-1".to_string(),
            with_summary: false,
        }
    }
}

/// What one host's pass produced. Fields stay `None` when the query behind
/// them failed; the record is emitted either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub name: String,
    pub summary: Option<String>,
    pub ip: Option<IpAddr>,
    pub mac: Option<String>,
}

impl fmt::Display for HostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(summary) = &self.summary {
            write!(f, " {summary}")?;
        }
        if let Some(ip) = &self.ip {
            write!(f, " {ip}")?;
        }
        if let Some(mac) = &self.mac {
            write!(f, " {mac}")?;
        }
        Ok(())
    }
}

impl CollectorConfig {
    pub fn host_name(&self, index: u32) -> String {
        format!("{}{}.{}", self.host_prefix, index, self.domain)
    }

    /// Produce one record per host index, ascending. DNS and controller
    /// failures leave the affected field empty; they never abort the pass.
    pub fn collect(
        &self,
        cred: &Credential,
        mgmt: &dyn Management,
        resolver: &dyn Resolve,
    ) -> Vec<HostRecord> {
        let mut records = Vec::with_capacity(self.last.saturating_sub(self.first) as usize + 1);
        for index in self.first..=self.last {
            let name = self.host_name(index);
            let ip = resolver.lookup(&name);
            if ip.is_none() {
                debug!("no address record for {name}");
            }
            let controller = format!("{}{}", self.controller_prefix, name);
            let summary = if self.with_summary {
                match mgmt.summary(&controller, cred) {
                    Ok(s) => summary_tokens(&s.to_string()),
                    Err(e) => {
                        debug!("summary query failed for {controller}: {e}");
                        None
                    }
                }
            } else {
                None
            };
            let mac = match mgmt.permanent_mac(&controller, cred, &self.adapter) {
                Ok(mac) => Some(format!("PermanentMACAddress: {mac}")),
                Err(e) => {
                    debug!("interface query failed for {controller}: {e}");
                    None
                }
            };
            records.push(HostRecord {
                name,
                summary,
                ip,
                mac,
            });
        }
        records
    }
}

// Tokens three and four of the rendered summary, whichever fields those
// happen to be. The field order is not part of any schema contract.
fn summary_tokens(text: &str) -> Option<String> {
    let mut tokens = text.split_whitespace().skip(2);
    let third = tokens.next()?;
    let fourth = tokens.next()?;
    Some(format!("{third} {fourth}"))
}

#[cfg(test)]
mod test {
    use super::{summary_tokens, CollectorConfig, HostRecord};

    #[test]
    fn host_names_follow_the_range() {
        let config = CollectorConfig::default();
        assert_eq!(config.host_name(2), "matlab2.nmrbox.org");
        assert_eq!(config.host_name(11), "matlab11.nmrbox.org");
    }

    #[test]
    fn third_and_fourth_tokens() {
        assert_eq!(
            summary_tokens("Ok On Off Healthy").as_deref(),
            Some("Off Healthy")
        );
        assert_eq!(
            summary_tokens("a  b\tc d e").as_deref(),
            Some("c d")
        );
        assert_eq!(summary_tokens("one two three"), None);
        assert_eq!(summary_tokens(""), None);
    }

    #[test]
    fn record_line_skips_absent_fields() {
        let full = HostRecord {
            name: "matlab1.nmrbox.org".to_string(),
            summary: Some("Off Healthy".to_string()),
            ip: Some("10.0.0.5".parse().unwrap()),
            mac: Some("PermanentMACAddress: AA:BB:CC:DD:EE:FF".to_string()),
        };
        assert_eq!(
            full.to_string(),
            "matlab1.nmrbox.org Off Healthy 10.0.0.5 PermanentMACAddress: AA:BB:CC:DD:EE:FF"
        );

        let bare = HostRecord {
            name: "matlab2.nmrbox.org".to_string(),
            summary: None,
            ip: None,
            mac: None,
        };
        assert_eq!(bare.to_string(), "matlab2.nmrbox.org");
    }
}
