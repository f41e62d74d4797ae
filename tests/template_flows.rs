//! Integration tests for the template catalog and the step mapper.

use pipeline_core::registry::NodeFamily;
use pipeline_core::state::DeploymentType;
use pipeline_core::template::*;

#[test]
fn fiori_app_has_six_ordered_steps() {
    let kinds: Vec<&str> = flow_for("fiori-app").iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(kinds, ["source", "build", "test", "build", "approval", "deploy"]);
}

#[test]
fn every_template_has_six_to_eight_steps() {
    for t in templates() {
        let n = flow_for(t.key).len();
        assert!((6..=8).contains(&n), "{} has {} steps", t.key, n);
    }
}

#[test]
fn known_keys_are_listed() {
    let keys: Vec<&str> = template_keys().collect();
    for key in ["sap-integration-suite", "fiori-app", "abap-cloud"] {
        assert!(keys.contains(&key), "missing template '{}'", key);
    }
}

#[test]
fn unknown_template_is_empty_flow() {
    assert!(flow_for("deleted-template").is_empty());
    assert!(template("deleted-template").is_none());
}

#[test]
fn template_metadata() {
    let t = template("sap-integration-suite").expect("Should exist");
    assert_eq!(t.deployment_type, DeploymentType::Integration);
    let t = template("fiori-app").expect("Should exist");
    assert_eq!(t.deployment_type, DeploymentType::Extension);
}

#[test]
fn every_step_maps_to_a_node() {
    for t in templates() {
        for step in t.steps {
            let node_type = node_type_for(step.kind);
            match step.kind {
                StepKind::Approval => assert_eq!(node_type.family(), NodeFamily::Approval),
                _ => assert!(matches!(node_type.family(), NodeFamily::Connector(_))),
            }
        }
    }
}

#[test]
fn raw_step_kind_mapping() {
    assert_eq!(node_type_for_str("source").unwrap().as_str(), "code_github");
    assert_eq!(node_type_for_str("approval").unwrap().as_str(), "approval_manual");
    assert!(node_type_for_str("Integration").is_err());
}
