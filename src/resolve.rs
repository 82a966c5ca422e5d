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
use std::net::{IpAddr, ToSocketAddrs};

/// Forward name lookup. Failure is an absent address, never an error.
pub trait Resolve: Send + Sync {
    fn lookup(&self, host: &str) -> Option<IpAddr>;
}

/// Resolver backed by the platform's name service.
pub struct DnsResolver;

impl Resolve for DnsResolver {
    fn lookup(&self, host: &str) -> Option<IpAddr> {
        // ToSocketAddrs wants a port; 443 is the one we would connect to anyway.
        (host, 443)
            .to_socket_addrs()
            .ok()?
            .next()
            .map(|addr| addr.ip())
    }
}

#[cfg(test)]
mod test {
    use super::{DnsResolver, Resolve};

    #[test]
    fn localhost_resolves() {
        assert!(DnsResolver.lookup("localhost").is_some());
    }

    #[test]
    fn reserved_name_does_not_resolve() {
        // .invalid is reserved to never resolve (RFC 2606)
        assert!(DnsResolver.lookup("no-such-host.invalid").is_none());
    }
}
