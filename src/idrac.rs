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
use std::collections::HashMap;

use crate::{
    model::{ComputerSystem, MemberCollection, NetworkDeviceFunction},
    network::{ClientPool, Endpoint, RedfishClient},
    Credential, IdracError, Management, SystemSummary,
};

// iDRAC embeds exactly one system and one chassis under fixed ids.
const SYSTEM_PATH: &str = "Systems/System.Embedded.1";
const ADAPTERS_PATH: &str = "Chassis/System.Embedded.1/NetworkAdapters";

/// Management client speaking Redfish to Dell iDRAC controllers.
pub struct Idrac {
    pool: ClientPool,
}

impl Idrac {
    pub fn new(pool: ClientPool) -> Idrac {
        Idrac { pool }
    }

    fn client(&self, controller: &str, cred: &Credential) -> RedfishClient {
        self.pool.client(Endpoint {
            host: controller.to_string(),
            port: None,
            user: Some(cred.user.clone()),
            password: Some(cred.password.clone()),
        })
    }

    /// Map of port identifier to the adapter card holding it, e.g.
    /// `NIC.Integrated.1-1-1` to `NIC.Integrated.1`. Built by enumerating the
    /// system's network interfaces and each card's device functions.
    fn ports(&self, client: &RedfishClient) -> Result<HashMap<String, String>, IdracError> {
        let mut ports = HashMap::new();
        let (_, interfaces): (_, MemberCollection) =
            client.get(&format!("{SYSTEM_PATH}/NetworkInterfaces"))?;
        for card in interfaces.members.iter().map(|m| m.leaf()) {
            let (_, functions): (_, MemberCollection) =
                client.get(&format!("{ADAPTERS_PATH}/{card}/NetworkDeviceFunctions"))?;
            for port in functions.members.iter().map(|m| m.leaf()) {
                ports.insert(port.to_string(), card.to_string());
            }
        }
        Ok(ports)
    }
}

impl Management for Idrac {
    fn summary(
        &self,
        controller: &str,
        cred: &Credential,
    ) -> Result<SystemSummary, IdracError> {
        let client = self.client(controller, cred);
        let (_, system): (_, ComputerSystem) = client.get(SYSTEM_PATH)?;
        Ok(SystemSummary {
            controller: controller.to_string(),
            hostname: system.host_name.unwrap_or_default(),
            service_tag: system.sku.unwrap_or_default(),
            power: system.power_state.to_string(),
            health: system
                .status
                .health
                .unwrap_or_else(|| "Unknown".to_string()),
        })
    }

    fn permanent_mac(
        &self,
        controller: &str,
        cred: &Credential,
        adapter: &str,
    ) -> Result<String, IdracError> {
        let client = self.client(controller, cred);
        let ports = self.ports(&client)?;
        let card = ports
            .get(adapter)
            .ok_or_else(|| IdracError::UnknownAdapter {
                controller: controller.to_string(),
                adapter: adapter.to_string(),
            })?;
        let api = format!("{ADAPTERS_PATH}/{card}/NetworkDeviceFunctions/{adapter}");
        let (_, function): (_, NetworkDeviceFunction) = client.get(&api)?;
        function
            .ethernet
            .and_then(|ethernet| ethernet.permanent_mac_address)
            .ok_or_else(|| IdracError::MissingKey {
                key: "PermanentMACAddress".to_string(),
                url: api,
            })
    }
}
