//! Relationship inference between rendered resources
//!
//! Kubernetes manifests do not carry foreign keys for the relations we want
//! to show, so they are derived:
//! - Service -> Deployment, by matching the Service selector against the
//!   Deployment's pod template labels
//! - Deployment -> ServiceAccount/ConfigMap/Secret, by scanning the pod spec
//!   for `serviceAccountName`, volumes and `env[].valueFrom` references

use crate::error::LinkError;
use crate::index::ResourceIndex;
use crate::models::manifest::lookup;
use crate::models::resource_kind::{DEPLOYMENT, SERVICE};
use crate::models::{LinkedKind, ManifestRecord};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Resources referenced by one Deployment, grouped by kind
///
/// Kinds iterate in [`LinkedKind`] order and names in sorted order, so
/// rendering is deterministic.
pub type DeploymentLinks = BTreeMap<LinkedKind, BTreeSet<String>>;

/// Both derived relations for a whole index
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    /// Links per Deployment, parallel to the Deployment bucket (last record per name wins)
    pub deployments: Vec<(String, DeploymentLinks)>,
    /// Matched Deployment names per Service, parallel to the Service bucket (last record per name wins)
    pub services: Vec<(String, Vec<String>)>,
}

/// Names of the Deployments whose pod template labels satisfy the Service selector
///
/// Every selector pair must be present with an equal value. An empty or
/// missing selector matches every Deployment.
pub fn match_service_to_deployments(
    service: &ManifestRecord,
    deployments: &[ManifestRecord],
) -> Vec<String> {
    let empty = serde_json::Map::new();
    let selector = service.service_selector().unwrap_or(&empty);

    deployments
        .iter()
        .filter(|deployment| {
            let labels = deployment.template_labels().unwrap_or(&empty);
            selector
                .iter()
                .all(|(key, value)| labels.get(key) == Some(value))
        })
        .filter_map(|deployment| deployment.name().map(str::to_string))
        .collect()
}

/// Find the ServiceAccount, ConfigMaps and Secrets a Deployment uses
///
/// Missing structure is treated as empty. A `configMapKeyRef` or
/// `secretKeyRef` that is present without a `name` is an error.
pub fn extract_deployment_links(
    deployment: &ManifestRecord,
) -> Result<DeploymentLinks, LinkError> {
    let mut links = DeploymentLinks::new();
    if let Some(account) = deployment
        .lookup_str(&["spec", "template", "spec", "serviceAccountName"])
        .filter(|s| !s.is_empty())
    {
        add_link(&mut links, LinkedKind::ServiceAccount, account);
    }

    for volume in deployment.lookup_array(&["spec", "template", "spec", "volumes"]) {
        if let Some(name) = str_at(volume, &["configMap", "name"]) {
            add_link(&mut links, LinkedKind::ConfigMap, name);
        }
        if let Some(name) = str_at(volume, &["secret", "secretName"]) {
            add_link(&mut links, LinkedKind::Secret, name);
        }
    }

    for container in deployment.lookup_array(&["spec", "template", "spec", "containers"]) {
        let env = lookup(container, &["env"])
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for var in env {
            let Some(value_from) = lookup(var, &["valueFrom"])
                .and_then(Value::as_object)
            else {
                continue;
            };

            for (key, kind) in [
                ("configMapKeyRef", LinkedKind::ConfigMap),
                ("secretKeyRef", LinkedKind::Secret),
            ] {
                if let Some(reference) = value_from.get(key) {
                    let name = reference
                        .get("name")
                        .and_then(Value::as_str)
                        .ok_or_else(|| LinkError::MissingReferenceName {
                            deployment: deployment.name().unwrap_or_default().to_string(),
                            reference: key.to_string(),
                        })?;
                    add_link(&mut links, kind, name);
                }
            }
        }
    }

    tracing::debug!(
        "Deployment '{}' references {} resources",
        deployment.name().unwrap_or_default(),
        links.values().map(BTreeSet::len).sum::<usize>()
    );
    Ok(links)
}

/// Compute Deployment and Service links for every indexed resource
///
/// Links are keyed by resource name: when two Deployments (or Services)
/// share a name, every node with that name gets the relation computed for
/// the last record. Every Deployment is still scanned, so a malformed
/// reference fails even on a record that is later shadowed.
pub fn resolve_links(index: &ResourceIndex) -> Result<LinkSet, LinkError> {
    let deployments = index.bucket(DEPLOYMENT);
    let services = index.bucket(SERVICE);

    let mut deployment_links: HashMap<&str, DeploymentLinks> = HashMap::new();
    for deployment in deployments {
        let links = extract_deployment_links(deployment)?;
        deployment_links.insert(deployment.name().unwrap_or_default(), links);
    }

    let mut service_links: HashMap<&str, Vec<String>> = HashMap::new();
    for service in services {
        let name = service.name().unwrap_or_default();
        let matched = match_service_to_deployments(service, deployments);
        if matched.is_empty() {
            tracing::debug!("Service '{}' selects no Deployment", name);
        }
        service_links.insert(name, matched);
    }

    Ok(LinkSet {
        deployments: by_name(deployments, &deployment_links),
        services: by_name(services, &service_links),
    })
}

/// Pair each record's name with the relation stored under that name
fn by_name<T: Clone + Default>(
    records: &[ManifestRecord],
    relation: &HashMap<&str, T>,
) -> Vec<(String, T)> {
    records
        .iter()
        .map(|record| {
            let name = record.name().unwrap_or_default();
            (
                name.to_string(),
                relation.get(name).cloned().unwrap_or_default(),
            )
        })
        .collect()
}

fn add_link(links: &mut DeploymentLinks, kind: LinkedKind, name: &str) {
    links.entry(kind).or_default().insert(name.to_string());
}

fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
