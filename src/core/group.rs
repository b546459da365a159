// ScanScope - core/group.rs
//
// The two grouped projections of the record vector: by port and by host.
//
// Each view maps a group key to the indices of its records in the flat
// `ScanDocument::records` vector. Storing indices rather than clones makes
// the bijection between the projections structural: a record exists once
// and both views point at it.
//
// Key iteration order is the display contract: ports ascend numerically,
// hosts ascend lexicographically (both from BTreeMap ordering). Within a
// group, records keep document order (Vec append).

use crate::core::model::ServiceRecord;
use std::collections::BTreeMap;

/// Records grouped by port, keys ascending numerically.
#[derive(Debug, Clone, Default)]
pub struct PortGroupView {
    groups: BTreeMap<u16, Vec<usize>>,
}

impl PortGroupView {
    /// Group `records` by port. Index `i` refers to `records[i]`.
    pub fn build(records: &[ServiceRecord]) -> Self {
        let mut groups: BTreeMap<u16, Vec<usize>> = BTreeMap::new();
        for (idx, record) in records.iter().enumerate() {
            groups.entry(record.port).or_default().push(idx);
        }
        Self { groups }
    }

    /// Iterate groups in ascending port order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &[usize])> {
        self.groups.iter().map(|(port, idxs)| (*port, idxs.as_slice()))
    }

    /// Number of distinct ports.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Records grouped by host address, keys ascending lexicographically.
#[derive(Debug, Clone, Default)]
pub struct HostGroupView {
    groups: BTreeMap<String, Vec<usize>>,
}

impl HostGroupView {
    /// Group `records` by host address. Index `i` refers to `records[i]`.
    pub fn build(records: &[ServiceRecord]) -> Self {
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, record) in records.iter().enumerate() {
            groups
                .entry(record.host_address.clone())
                .or_default()
                .push(idx);
        }
        Self { groups }
    }

    /// Iterate groups in ascending host-address order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.groups
            .iter()
            .map(|(host, idxs)| (host.as_str(), idxs.as_slice()))
    }

    /// Number of distinct hosts that contributed records.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::RecordKey;
    use std::collections::BTreeSet;

    fn record(host: &str, port: u16, service: &str) -> ServiceRecord {
        ServiceRecord {
            host_address: host.to_string(),
            port,
            service_name: Some(service.to_string()),
            product: "N/A".to_string(),
            version: "N/A".to_string(),
        }
    }

    /// The worked example: one host, ports 22 and 80.
    #[test]
    fn test_single_host_two_ports() {
        let records = vec![
            record("10.0.0.5", 22, "ssh"),
            record("10.0.0.5", 80, "http"),
        ];
        let by_port = PortGroupView::build(&records);
        let by_host = HostGroupView::build(&records);

        let ports: Vec<u16> = by_port.iter().map(|(p, _)| p).collect();
        assert_eq!(ports, vec![22, 80]);

        let (host, idxs) = by_host.iter().next().unwrap();
        assert_eq!(host, "10.0.0.5");
        assert_eq!(idxs, &[0, 1]);
    }

    #[test]
    fn test_port_keys_strictly_increasing() {
        let records = vec![
            record("a", 443, "https"),
            record("b", 22, "ssh"),
            record("c", 8080, "http"),
            record("d", 80, "http"),
        ];
        let view = PortGroupView::build(&records);
        let ports: Vec<u16> = view.iter().map(|(p, _)| p).collect();
        for pair in ports.windows(2) {
            assert!(pair[0] < pair[1], "ports not strictly increasing: {ports:?}");
        }
    }

    #[test]
    fn test_host_keys_lexicographic() {
        let records = vec![
            record("192.168.1.9", 80, "http"),
            record("10.0.0.5", 80, "http"),
            record("192.168.1.10", 80, "http"),
        ];
        let view = HostGroupView::build(&records);
        let hosts: Vec<&str> = view.iter().map(|(h, _)| h).collect();
        // Lexicographic, not numeric: "192.168.1.10" < "192.168.1.9".
        assert_eq!(hosts, vec!["10.0.0.5", "192.168.1.10", "192.168.1.9"]);
    }

    /// Two hosts sharing a port appear as siblings under that port, in
    /// document order.
    #[test]
    fn test_shared_port_sibling_order() {
        let records = vec![
            record("10.0.0.2", 443, "https"),
            record("10.0.0.1", 443, "https"),
        ];
        let view = PortGroupView::build(&records);
        let (port, idxs) = view.iter().next().unwrap();
        assert_eq!(port, 443);
        let hosts: Vec<&str> = idxs
            .iter()
            .map(|&i| records[i].host_address.as_str())
            .collect();
        assert_eq!(hosts, vec!["10.0.0.2", "10.0.0.1"]);
    }

    /// Every record index appears exactly once in each view, under the
    /// same (host, port) identity.
    #[test]
    fn test_views_are_a_bijection() {
        let records = vec![
            record("10.0.0.1", 22, "ssh"),
            record("10.0.0.1", 443, "https"),
            record("10.0.0.2", 443, "https"),
            record("10.0.0.3", 80, "http"),
        ];
        let by_port = PortGroupView::build(&records);
        let by_host = HostGroupView::build(&records);

        let port_side: BTreeSet<usize> =
            by_port.iter().flat_map(|(_, idxs)| idxs.iter().copied()).collect();
        let host_side: BTreeSet<usize> =
            by_host.iter().flat_map(|(_, idxs)| idxs.iter().copied()).collect();

        assert_eq!(port_side.len(), records.len(), "port view must cover all records once");
        assert_eq!(port_side, host_side, "both views must cover the same records");

        // Identity agreement: the key derived through either view is the
        // record's own key.
        for (port, idxs) in by_port.iter() {
            for &i in idxs {
                assert_eq!(records[i].port, port);
                assert_eq!(records[i].key(), RecordKey {
                    host_address: records[i].host_address.clone(),
                    port,
                });
            }
        }
        for (host, idxs) in by_host.iter() {
            for &i in idxs {
                assert_eq!(records[i].host_address, host);
            }
        }
    }

    #[test]
    fn test_counts() {
        let records = vec![
            record("10.0.0.1", 22, "ssh"),
            record("10.0.0.1", 80, "http"),
            record("10.0.0.2", 80, "http"),
        ];
        let by_port = PortGroupView::build(&records);
        let by_host = HostGroupView::build(&records);
        assert_eq!(by_port.group_count(), 2);
        assert_eq!(by_host.group_count(), 2);
        assert_eq!(by_port.record_count(), 3);
        assert_eq!(by_host.record_count(), 3);
    }

    #[test]
    fn test_empty_records_yield_empty_views() {
        let by_port = PortGroupView::build(&[]);
        let by_host = HostGroupView::build(&[]);
        assert_eq!(by_port.group_count(), 0);
        assert_eq!(by_host.group_count(), 0);
        assert!(by_port.iter().next().is_none());
        assert!(by_host.iter().next().is_none());
    }
}
