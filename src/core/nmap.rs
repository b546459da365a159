// ScanScope - core/nmap.rs
//
// Nmap XML scan document parsing.
// Core layer: accepts the document text, never touches the filesystem.
//
// The parse is atomic: any structural defect aborts with a
// MalformedInputError and no partial result.

use crate::core::model::{ScanDocument, ScanInfo, ServiceRecord};
use crate::util::constants::FIELD_PLACEHOLDER;
use crate::util::error::MalformedInputError;
use chrono::DateTime;
use roxmltree::{Document, Node};

/// Parse an Nmap XML document into service records plus scan metadata.
///
/// Structural requirements:
///   - well-formed XML with an `<nmaprun>` root;
///   - every `<host>` carries an `<address addr="...">` (the first address
///     element is the host address, matching nmap's emission order);
///   - every `<port>` carries a numeric `portid`.
///
/// A `<port>` without a `<service>` child is skipped: only identified
/// services are listed. Its `portid` is still validated first, so a
/// malformed port fails the parse even when the port would be dropped.
///
/// Missing `product`/`version` attributes become "N/A"; a missing service
/// `name` is preserved as absent.
pub fn parse_document(xml: &str) -> Result<ScanDocument, MalformedInputError> {
    let doc = Document::parse(xml).map_err(|e| MalformedInputError::Xml { source: e })?;

    let root = doc.root_element();
    if root.tag_name().name() != "nmaprun" {
        return Err(MalformedInputError::UnexpectedRoot {
            found: root.tag_name().name().to_string(),
        });
    }

    let info = parse_scan_info(&root);

    let mut records = Vec::new();
    let mut host_count = 0usize;

    for (host_index, host_node) in root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "host")
        .enumerate()
    {
        host_count += 1;

        let host_address = host_node
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == "address")
            .and_then(|n| n.attribute("addr"))
            .ok_or(MalformedInputError::MissingAddress { host_index })?
            .to_string();

        // <port> elements live under <host><ports>; descendants() also
        // tolerates the (rare) grouping-free layout some tools emit.
        for port_node in host_node
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "port")
        {
            let raw_port =
                port_node
                    .attribute("portid")
                    .ok_or_else(|| MalformedInputError::MissingPortId {
                        host: host_address.clone(),
                    })?;
            let port: u16 = raw_port
                .parse()
                .map_err(|e| MalformedInputError::InvalidPortId {
                    host: host_address.clone(),
                    raw: raw_port.to_string(),
                    source: e,
                })?;

            let Some(service_node) = port_node
                .children()
                .find(|n| n.is_element() && n.tag_name().name() == "service")
            else {
                // No <service> child: the port was seen open but not
                // identified. Contributes no record.
                continue;
            };

            records.push(ServiceRecord {
                host_address: host_address.clone(),
                port,
                service_name: service_node.attribute("name").map(str::to_string),
                product: service_node
                    .attribute("product")
                    .unwrap_or(FIELD_PLACEHOLDER)
                    .to_string(),
                version: service_node
                    .attribute("version")
                    .unwrap_or(FIELD_PLACEHOLDER)
                    .to_string(),
            });
        }
    }

    tracing::debug!(
        hosts = host_count,
        records = records.len(),
        "Scan document parsed"
    );

    Ok(ScanDocument {
        records,
        host_count,
        info,
    })
}

/// Read scan metadata from the `<nmaprun>` root and its `<runstats>` child.
/// Best-effort only: nothing here can fail the parse.
fn parse_scan_info(root: &Node<'_, '_>) -> ScanInfo {
    let started = root
        .attribute("start")
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    let finished = root
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "runstats")
        .and_then(|rs| {
            rs.children()
                .find(|n| n.is_element() && n.tag_name().name() == "finished")
        });

    ScanInfo {
        scanner: root.attribute("scanner").map(str::to_string),
        args: root.attribute("args").map(str::to_string),
        version: root.attribute("version").map(str::to_string),
        started,
        summary: finished
            .and_then(|f| f.attribute("summary"))
            .map(str::to_string),
        elapsed: finished
            .and_then(|f| f.attribute("elapsed"))
            .and_then(|e| e.parse::<f64>().ok()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PORT_HOST: &str = r#"<?xml version="1.0"?>
<nmaprun scanner="nmap" args="nmap -sV 10.0.0.5" version="7.94" start="1705329022">
  <host>
    <address addr="10.0.0.5" addrtype="ipv4"/>
    <ports>
      <port protocol="tcp" portid="22">
        <state state="open"/>
        <service name="ssh" product="OpenSSH" version="8.9"/>
      </port>
      <port protocol="tcp" portid="80">
        <state state="open"/>
        <service name="http"/>
      </port>
    </ports>
  </host>
  <runstats>
    <finished timestr="Mon Jan 15 14:30:25 2024" elapsed="3.02" summary="1 host up" exit="success"/>
  </runstats>
</nmaprun>"#;

    #[test]
    fn test_parse_two_port_host() {
        let doc = parse_document(TWO_PORT_HOST).unwrap();
        assert_eq!(doc.host_count, 1);
        assert_eq!(doc.records.len(), 2);

        let ssh = &doc.records[0];
        assert_eq!(ssh.host_address, "10.0.0.5");
        assert_eq!(ssh.port, 22);
        assert_eq!(ssh.service_name.as_deref(), Some("ssh"));
        assert_eq!(ssh.product, "OpenSSH");
        assert_eq!(ssh.version, "8.9");

        // Missing product/version surface as the placeholder, never as
        // empty strings.
        let http = &doc.records[1];
        assert_eq!(http.port, 80);
        assert_eq!(http.service_name.as_deref(), Some("http"));
        assert_eq!(http.product, "N/A");
        assert_eq!(http.version, "N/A");
    }

    #[test]
    fn test_parse_scan_metadata() {
        let doc = parse_document(TWO_PORT_HOST).unwrap();
        assert_eq!(doc.info.scanner.as_deref(), Some("nmap"));
        assert_eq!(doc.info.args.as_deref(), Some("nmap -sV 10.0.0.5"));
        assert_eq!(doc.info.version.as_deref(), Some("7.94"));
        assert_eq!(doc.info.summary.as_deref(), Some("1 host up"));
        assert_eq!(doc.info.elapsed, Some(3.02));
        let started = doc.info.started.expect("start epoch should parse");
        assert_eq!(started.format("%Y-%m-%d").to_string(), "2024-01-15");
    }

    #[test]
    fn test_service_name_absent_is_preserved_not_defaulted() {
        let xml = r#"<nmaprun>
  <host>
    <address addr="10.0.0.9"/>
    <ports>
      <port portid="8081"><service product="Widget"/></port>
    </ports>
  </host>
</nmaprun>"#;
        let doc = parse_document(xml).unwrap();
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.records[0].service_name, None);
        assert_eq!(doc.records[0].product, "Widget");
        assert_eq!(doc.records[0].version, "N/A");
    }

    #[test]
    fn test_port_without_service_is_skipped() {
        let xml = r#"<nmaprun>
  <host>
    <address addr="10.0.0.5"/>
    <ports>
      <port portid="135"><state state="open"/></port>
      <port portid="22"><service name="ssh"/></port>
    </ports>
  </host>
</nmaprun>"#;
        let doc = parse_document(xml).unwrap();
        assert_eq!(doc.records.len(), 1, "unidentified port must not appear");
        assert_eq!(doc.records[0].port, 22);
    }

    #[test]
    fn test_host_without_any_port_still_counted() {
        let xml = r#"<nmaprun>
  <host><address addr="10.0.0.7"/></host>
  <host>
    <address addr="10.0.0.5"/>
    <ports><port portid="22"><service name="ssh"/></port></ports>
  </host>
</nmaprun>"#;
        let doc = parse_document(xml).unwrap();
        assert_eq!(doc.host_count, 2);
        assert_eq!(doc.records.len(), 1);
    }

    #[test]
    fn test_not_xml_is_malformed() {
        let result = parse_document("this is not xml at all <<<");
        assert!(
            matches!(result, Err(MalformedInputError::Xml { .. })),
            "expected Xml error, got {result:?}"
        );
    }

    #[test]
    fn test_wrong_root_is_malformed() {
        let result = parse_document("<scan><host/></scan>");
        assert!(
            matches!(result, Err(MalformedInputError::UnexpectedRoot { ref found }) if found == "scan"),
            "expected UnexpectedRoot, got {result:?}"
        );
    }

    #[test]
    fn test_host_without_address_is_malformed() {
        let xml = r#"<nmaprun>
  <host>
    <ports><port portid="22"><service name="ssh"/></port></ports>
  </host>
</nmaprun>"#;
        let result = parse_document(xml);
        assert!(
            matches!(result, Err(MalformedInputError::MissingAddress { host_index: 0 })),
            "expected MissingAddress, got {result:?}"
        );
    }

    #[test]
    fn test_port_without_portid_is_malformed() {
        let xml = r#"<nmaprun>
  <host>
    <address addr="10.0.0.5"/>
    <ports><port protocol="tcp"><service name="ssh"/></port></ports>
  </host>
</nmaprun>"#;
        let result = parse_document(xml);
        assert!(
            matches!(result, Err(MalformedInputError::MissingPortId { ref host }) if host == "10.0.0.5"),
            "expected MissingPortId, got {result:?}"
        );
    }

    #[test]
    fn test_non_numeric_portid_is_malformed() {
        let xml = r#"<nmaprun>
  <host>
    <address addr="10.0.0.5"/>
    <ports><port portid="https"><service name="https"/></port></ports>
  </host>
</nmaprun>"#;
        let result = parse_document(xml);
        assert!(
            matches!(result, Err(MalformedInputError::InvalidPortId { ref raw, .. }) if raw == "https"),
            "expected InvalidPortId, got {result:?}"
        );
    }

    /// A structurally bad port fails the parse even though its missing
    /// <service> would otherwise drop it: the portid check runs first and
    /// the failure is atomic.
    #[test]
    fn test_malformed_serviceless_port_still_fails_atomically() {
        let xml = r#"<nmaprun>
  <host>
    <address addr="10.0.0.5"/>
    <ports>
      <port portid="22"><service name="ssh"/></port>
      <port protocol="tcp"><state state="open"/></port>
    </ports>
  </host>
</nmaprun>"#;
        let result = parse_document(xml);
        assert!(
            matches!(result, Err(MalformedInputError::MissingPortId { .. })),
            "expected MissingPortId, got {result:?}"
        );
    }

    /// The first <address> element wins when nmap reports several
    /// (ipv4 followed by mac, in emission order).
    #[test]
    fn test_first_address_element_is_used() {
        let xml = r#"<nmaprun>
  <host>
    <address addr="192.168.1.10" addrtype="ipv4"/>
    <address addr="AA:BB:CC:DD:EE:FF" addrtype="mac"/>
    <ports><port portid="443"><service name="https"/></port></ports>
  </host>
</nmaprun>"#;
        let doc = parse_document(xml).unwrap();
        assert_eq!(doc.records[0].host_address, "192.168.1.10");
    }

    #[test]
    fn test_empty_run_yields_empty_document() {
        let doc = parse_document("<nmaprun scanner=\"nmap\"/>").unwrap();
        assert!(doc.records.is_empty());
        assert_eq!(doc.host_count, 0);
    }

    #[test]
    fn test_records_preserve_document_order() {
        let xml = r#"<nmaprun>
  <host>
    <address addr="10.0.0.2"/>
    <ports>
      <port portid="443"><service name="https"/></port>
    </ports>
  </host>
  <host>
    <address addr="10.0.0.1"/>
    <ports>
      <port portid="443"><service name="https"/></port>
      <port portid="22"><service name="ssh"/></port>
    </ports>
  </host>
</nmaprun>"#;
        let doc = parse_document(xml).unwrap();
        let order: Vec<(&str, u16)> = doc
            .records
            .iter()
            .map(|r| (r.host_address.as_str(), r.port))
            .collect();
        assert_eq!(
            order,
            vec![("10.0.0.2", 443), ("10.0.0.1", 443), ("10.0.0.1", 22)]
        );
    }
}
