//! Resource indexing tests
//!
//! Indexing must never fail: malformed documents are dropped and everything
//! else is grouped by kind in document order.

use helmviz::{ResourceIndex, index_resources, parse_documents};
use serde_json::{Value, json};

#[test]
fn test_malformed_documents_are_skipped() {
    let documents = vec![
        Value::Null,
        json!("just a string"),
        json!(["a", "list"]),
        json!({}),
        json!({ "kind": "ConfigMap" }),
        json!({ "kind": "ConfigMap", "metadata": {} }),
        json!({ "metadata": { "name": "no-kind" } }),
        json!({ "kind": "ConfigMap", "metadata": { "name": "" } }),
        json!({ "kind": "ConfigMap", "metadata": "not-a-map" }),
        json!({ "kind": "ConfigMap", "metadata": { "name": "kept" } }),
    ];

    let index = index_resources(documents);
    assert_eq!(index.len(), 1);
    assert_eq!(index.kinds().collect::<Vec<_>>(), vec!["ConfigMap"]);
    assert!(index.get("ConfigMap", "kept").is_some());
}

#[test]
fn test_only_malformed_documents() {
    let index = index_resources(vec![Value::Null, json!(1), json!({ "kind": "Secret" })]);
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
}

#[test]
fn test_bucket_order_matches_document_order() {
    let index = index_resources(vec![
        json!({ "kind": "Deployment", "metadata": { "name": "b" } }),
        json!({ "kind": "Service", "metadata": { "name": "svc" } }),
        json!({ "kind": "Deployment", "metadata": { "name": "a" } }),
    ]);

    let names: Vec<_> = index
        .bucket("Deployment")
        .iter()
        .filter_map(|r| r.name())
        .collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(index.kinds().collect::<Vec<_>>(), vec!["Deployment", "Service"]);
}

#[test]
fn test_lookup_points_into_buckets() {
    let index = index_resources(vec![
        json!({ "kind": "Secret", "metadata": { "name": "creds" }, "type": "Opaque" }),
    ]);

    let from_lookup = index.get("Secret", "creds").unwrap();
    let from_bucket = &index.bucket("Secret")[0];
    assert!(std::ptr::eq(from_lookup, from_bucket));
    assert_eq!(from_lookup.lookup_str(&["type"]), Some("Opaque"));
}

#[test]
fn test_index_from_helm_output() {
    let output = r#"---
# Source: app/templates/serviceaccount.yaml
apiVersion: v1
kind: ServiceAccount
metadata:
  name: app
---
# Source: app/templates/empty.yaml
---
# Source: app/templates/service.yaml
apiVersion: v1
kind: Service
metadata:
  name: app
spec:
  selector:
    app.kubernetes.io/name: app
"#;

    let index = index_resources(parse_documents(output).unwrap());
    assert_eq!(index.len(), 2);
    assert!(index.get("ServiceAccount", "app").is_some());
    assert!(index.get("Service", "app").is_some());
}

#[test]
fn test_default_index_is_empty() {
    let index = ResourceIndex::default();
    assert!(index.bucket("Service").is_empty());
    assert!(index.get("Service", "x").is_none());
}
