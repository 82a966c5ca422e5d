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
/// Drive the inventory pass through fake controller and resolver
/// implementations. No network traffic happens here; the fakes return
/// canned data per controller name and fail for everything else.
use std::collections::HashMap;
use std::net::IpAddr;

use idrac_inventory::{
    CollectorConfig, Credential, IdracError, Management, Resolve, SystemSummary,
};

struct FakeManagement {
    summaries: HashMap<String, SystemSummary>,
    macs: HashMap<String, String>,
}

impl FakeManagement {
    fn empty() -> FakeManagement {
        FakeManagement {
            summaries: HashMap::new(),
            macs: HashMap::new(),
        }
    }
}

impl Management for FakeManagement {
    fn summary(
        &self,
        controller: &str,
        _cred: &Credential,
    ) -> Result<SystemSummary, IdracError> {
        self.summaries
            .get(controller)
            .cloned()
            .ok_or_else(|| IdracError::MissingKey {
                key: "HostName".to_string(),
                url: controller.to_string(),
            })
    }

    fn permanent_mac(
        &self,
        controller: &str,
        _cred: &Credential,
        adapter: &str,
    ) -> Result<String, IdracError> {
        self.macs
            .get(controller)
            .cloned()
            .ok_or_else(|| IdracError::UnknownAdapter {
                controller: controller.to_string(),
                adapter: adapter.to_string(),
            })
    }
}

struct FakeResolver {
    addrs: HashMap<String, IpAddr>,
}

impl Resolve for FakeResolver {
    fn lookup(&self, host: &str) -> Option<IpAddr> {
        self.addrs.get(host).copied()
    }
}

fn cred() -> Credential {
    Credential {
        user: "root".to_string(),
        password: "secret".to_string(),
    }
}

fn single_host_config() -> CollectorConfig {
    CollectorConfig {
        first: 1,
        last: 1,
        with_summary: true,
        ..Default::default()
    }
}

#[test]
fn single_host_pass_emits_summary_ip_and_mac() {
    let mut mgmt = FakeManagement::empty();
    mgmt.summaries.insert(
        "idrac-matlab1.nmrbox.org".to_string(),
        SystemSummary {
            controller: "idrac-matlab1.nmrbox.org".to_string(),
            hostname: "matlab1.nmrbox.org".to_string(),
            service_tag: "7WKJJH2".to_string(),
            power: "On".to_string(),
            health: "OK".to_string(),
        },
    );
    mgmt.macs.insert(
        "idrac-matlab1.nmrbox.org".to_string(),
        "24:6E:96:9C:E3:30".to_string(),
    );
    let resolver = FakeResolver {
        addrs: HashMap::from([(
            "matlab1.nmrbox.org".to_string(),
            "10.0.0.5".parse().unwrap(),
        )]),
    };

    let records = single_host_config().collect(&cred(), &mgmt, &resolver);
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].to_string(),
        "matlab1.nmrbox.org 7WKJJH2 On 10.0.0.5 PermanentMACAddress: 24:6E:96:9C:E3:30"
    );
}

// The summary field is positional: tokens three and four of whatever text
// the controller summary renders to, no matter what those fields mean.
#[test]
fn summary_field_is_positional() {
    let mut mgmt = FakeManagement::empty();
    mgmt.summaries.insert(
        "idrac-matlab1.nmrbox.org".to_string(),
        SystemSummary {
            controller: "Ok".to_string(),
            hostname: "On".to_string(),
            service_tag: "Off".to_string(),
            power: "Healthy".to_string(),
            health: "ignored".to_string(),
        },
    );
    mgmt.macs.insert(
        "idrac-matlab1.nmrbox.org".to_string(),
        "AA:BB:CC:DD:EE:FF".to_string(),
    );
    let resolver = FakeResolver {
        addrs: HashMap::from([(
            "matlab1.nmrbox.org".to_string(),
            "10.0.0.5".parse().unwrap(),
        )]),
    };

    let records = single_host_config().collect(&cred(), &mgmt, &resolver);
    assert_eq!(records[0].summary.as_deref(), Some("Off Healthy"));
    assert_eq!(
        records[0].to_string(),
        "matlab1.nmrbox.org Off Healthy 10.0.0.5 PermanentMACAddress: AA:BB:CC:DD:EE:FF"
    );
}

#[test]
fn fleet_pass_preserves_index_order() {
    let mut mgmt = FakeManagement::empty();
    let mut addrs = HashMap::new();
    for index in 2..=11u32 {
        mgmt.macs.insert(
            format!("idrac-matlab{index}.nmrbox.org"),
            format!("24:6E:96:9C:E3:{index:02X}"),
        );
        addrs.insert(
            format!("matlab{index}.nmrbox.org"),
            format!("10.0.0.{index}").parse().unwrap(),
        );
    }
    let resolver = FakeResolver { addrs };

    let records = CollectorConfig::default().collect(&cred(), &mgmt, &resolver);
    assert_eq!(records.len(), 10);
    for (record, index) in records.iter().zip(2..=11u32) {
        assert_eq!(record.name, format!("matlab{index}.nmrbox.org"));
        // no summary on the fleet-wide pass
        assert_eq!(record.summary, None);
        assert!(record.ip.is_some());
        assert!(record.mac.is_some());
    }
}

#[test]
fn dns_failure_leaves_ip_empty_but_keeps_queries() {
    let mut mgmt = FakeManagement::empty();
    mgmt.summaries.insert(
        "idrac-matlab1.nmrbox.org".to_string(),
        SystemSummary {
            controller: "idrac-matlab1.nmrbox.org".to_string(),
            hostname: "matlab1.nmrbox.org".to_string(),
            service_tag: "7WKJJH2".to_string(),
            power: "On".to_string(),
            health: "OK".to_string(),
        },
    );
    mgmt.macs.insert(
        "idrac-matlab1.nmrbox.org".to_string(),
        "24:6E:96:9C:E3:30".to_string(),
    );
    let resolver = FakeResolver {
        addrs: HashMap::new(),
    };

    let records = single_host_config().collect(&cred(), &mgmt, &resolver);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ip, None);
    assert!(records[0].summary.is_some());
    assert!(records[0].mac.is_some());
    assert_eq!(
        records[0].to_string(),
        "matlab1.nmrbox.org 7WKJJH2 On PermanentMACAddress: 24:6E:96:9C:E3:30"
    );
}

#[test]
fn query_failure_leaves_fields_empty_but_emits_the_line() {
    let mgmt = FakeManagement::empty();
    let resolver = FakeResolver {
        addrs: HashMap::from([(
            "matlab1.nmrbox.org".to_string(),
            "10.0.0.5".parse().unwrap(),
        )]),
    };

    let records = single_host_config().collect(&cred(), &mgmt, &resolver);
    assert_eq!(records.len(), 1);
    assert!(records[0].ip.is_some());
    assert_eq!(records[0].summary, None);
    assert_eq!(records[0].mac, None);
    assert_eq!(records[0].to_string(), "matlab1.nmrbox.org 10.0.0.5");
}
