//! Firewall bundle

use serde::{Deserialize, Serialize};

use super::{Bundle, BundleKind};

/// Firewall configuration (only the filter/INPUT chain is managed)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FirewallBundle {
    pub tables: FirewallTables,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FirewallTables {
    pub filter: FilterTable,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FilterTable {
    #[serde(rename = "INPUT")]
    pub input: FirewallChain,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FirewallChain {
    pub policy: FirewallPolicy,
    #[serde(default)]
    pub rules: Vec<FirewallRule>,
}

/// Default chain policy
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum FirewallPolicy {
    #[default]
    Accept,
    Drop,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FirewallRule {
    /// Source address or CIDR
    #[serde(rename = "srcIp")]
    pub src_ip: String,
    /// Destination port, empty for protocols without ports
    #[serde(rename = "dstPort", default)]
    pub dst_port: String,
    pub proto: FirewallProtocol,
    pub target: FirewallTarget,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FirewallProtocol {
    Tcp,
    Udp,
    Icmp,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FirewallTarget {
    Accept,
    Drop,
    Reject,
}

impl FirewallBundle {
    /// Firewall with the given INPUT policy and rules
    pub fn input(policy: FirewallPolicy, rules: Vec<FirewallRule>) -> Self {
        Self {
            tables: FirewallTables {
                filter: FilterTable {
                    input: FirewallChain { policy, rules },
                },
            },
        }
    }

    pub fn input_chain(&self) -> &FirewallChain {
        &self.tables.filter.input
    }
}

impl Bundle for FirewallBundle {
    const KIND: BundleKind = BundleKind::Firewall;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ssh_rule() -> FirewallRule {
        FirewallRule {
            src_ip: "192.0.2.0/24".to_string(),
            dst_port: "22".to_string(),
            proto: FirewallProtocol::Tcp,
            target: FirewallTarget::Accept,
        }
    }

    #[test]
    fn test_serialize_shape() {
        let bundle = FirewallBundle::input(FirewallPolicy::Drop, vec![ssh_rule()]);
        assert_eq!(
            serde_json::to_value(&bundle).unwrap(),
            serde_json::json!({
                "tables": {
                    "filter": {
                        "INPUT": {
                            "policy": "DROP",
                            "rules": [{
                                "srcIp": "192.0.2.0/24",
                                "dstPort": "22",
                                "proto": "tcp",
                                "target": "ACCEPT"
                            }]
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_icmp_rule_without_port() {
        let rule: FirewallRule = serde_json::from_value(serde_json::json!({
            "srcIp": "0.0.0.0/0",
            "proto": "icmp",
            "target": "REJECT"
        }))
        .unwrap();
        assert_eq!(rule.dst_port, "");
        assert_eq!(rule.proto, FirewallProtocol::Icmp);
        assert_eq!(rule.target, FirewallTarget::Reject);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: Result<FirewallChain, _> =
            serde_json::from_value(serde_json::json!({"policy": "MAYBE"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_input_chain() {
        let bundle = FirewallBundle::input(FirewallPolicy::Accept, vec![]);
        assert_eq!(bundle.input_chain().policy, FirewallPolicy::Accept);
        assert!(bundle.input_chain().rules.is_empty());
    }
}
