//! Name-keyed access to the descriptor table. The table is built once
//! on first access and never mutated afterwards; `build` has already
//! validated each entry, so a malformed descriptor aborts the process
//! here rather than on some later call.

use klaviyo_client::EndpointDescriptor;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::endpoints;

static TABLE: Lazy<Vec<EndpointDescriptor>> = Lazy::new(endpoints::all);

static BY_NAME: Lazy<HashMap<&'static str, &'static EndpointDescriptor>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(TABLE.len());
    for descriptor in TABLE.iter() {
        let previous = index.insert(descriptor.operation_id, descriptor);
        assert!(
            previous.is_none(),
            "duplicate operation_id '{}'",
            descriptor.operation_id
        );
    }
    index
});

/// The full descriptor table, in catalog order.
pub fn all() -> &'static [EndpointDescriptor] {
    &TABLE
}

/// Look an operation up by its id.
pub fn find(operation_id: &str) -> Option<&'static EndpointDescriptor> {
    BY_NAME.get(operation_id).copied()
}

pub fn count() -> usize {
    TABLE.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use klaviyo_client::{build_plan, Placement};
    use serde_json::{json, Map, Value};

    fn filled_args(descriptor: &EndpointDescriptor) -> Map<String, Value> {
        let mut args = Map::new();
        for param in &descriptor.params {
            let value = match param.placement {
                Placement::Path => json!("PLACEHOLDER"),
                Placement::Query => json!("value"),
                Placement::Body if param.is_file => json!("/tmp/upload.png"),
                Placement::Body => json!({"type": "resource"}),
            };
            args.insert(param.arg_name.to_string(), value);
        }
        args
    }

    #[test]
    fn test_table_loads_and_is_name_unique() {
        // BY_NAME panics on a duplicate; touching it is the assertion.
        assert_eq!(BY_NAME.len(), count());
        assert!(count() >= 230, "table holds {} operations", count());
    }

    #[test]
    fn test_find_known_and_unknown() {
        let d = find("get_campaign").expect("get_campaign registered");
        assert_eq!(d.path_template, "/api/campaigns/{id}");
        assert!(find("no_such_operation").is_none());
    }

    #[test]
    fn test_path_placeholders_match_path_params_everywhere() {
        for descriptor in all() {
            let placeholders = descriptor.path_placeholders();
            let path_params: Vec<&str> = descriptor
                .params_with(Placement::Path)
                .map(|p| p.arg_name)
                .collect();
            assert_eq!(
                placeholders, path_params,
                "'{}' path params drift from template",
                descriptor.operation_id
            );
        }
    }

    #[test]
    fn test_auth_partitioning_follows_path_prefix() {
        for descriptor in all() {
            assert_eq!(
                descriptor.path_template.starts_with("/client/"),
                descriptor.is_public(),
                "'{}' auth kind disagrees with its path",
                descriptor.operation_id
            );
            if descriptor.is_public() {
                let company = descriptor
                    .params
                    .iter()
                    .find(|p| p.arg_name == "company_id")
                    .unwrap_or_else(|| {
                        panic!("'{}' is public without company_id", descriptor.operation_id)
                    });
                assert!(company.required);
            }
        }
    }

    #[test]
    fn test_bracketed_wire_names_survive_into_urls() {
        let mut checked = 0;
        for descriptor in all() {
            let bracketed: Vec<&str> = descriptor
                .params_with(Placement::Query)
                .filter(|p| p.wire_name.contains('['))
                .map(|p| p.wire_name)
                .collect();
            if bracketed.is_empty() {
                continue;
            }
            let plan = build_plan("https://a.klaviyo.com", descriptor, &filled_args(descriptor))
                .unwrap_or_else(|e| panic!("'{}': {e}", descriptor.operation_id));
            for wire_name in bracketed {
                assert!(
                    plan.url.contains(&format!("{wire_name}=")),
                    "'{}' rewrote '{}' in {}",
                    descriptor.operation_id,
                    wire_name,
                    plan.url
                );
                checked += 1;
            }
        }
        assert!(checked > 100, "only {checked} bracketed params exercised");
    }

    #[test]
    fn test_every_descriptor_builds_a_plan_with_all_args() {
        for descriptor in all() {
            let plan = build_plan("https://a.klaviyo.com", descriptor, &filled_args(descriptor))
                .unwrap_or_else(|e| panic!("'{}': {e}", descriptor.operation_id));
            assert!(
                !plan.url.contains('{'),
                "'{}' left a placeholder in {}",
                descriptor.operation_id,
                plan.url
            );
        }
    }

    #[test]
    fn test_report_families_have_values_and_series() {
        for family in ["campaign", "flow", "form", "segment"] {
            for flavor in ["values", "series"] {
                let operation_id = format!("query_{family}_{flavor}");
                let descriptor = find(&operation_id)
                    .unwrap_or_else(|| panic!("missing report operation '{operation_id}'"));
                assert_eq!(
                    descriptor.path_template,
                    format!("/api/{family}-{flavor}-reports")
                );
            }
        }
    }

    #[test]
    fn test_descriptions_are_present() {
        for descriptor in all() {
            assert!(
                !descriptor.description.is_empty(),
                "'{}' has no description",
                descriptor.operation_id
            );
        }
    }
}
