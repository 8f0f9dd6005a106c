//! Turns `(descriptor, argument bag)` into a concrete request plan.
//! All argument validation the core performs happens here, before any
//! network activity.

use klaviyo_core::{ApiError, HttpMethod, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::descriptor::{BodyKind, EndpointDescriptor, Placement};
use crate::transport::{MultipartField, MultipartValue, RequestBody};

/// Characters escaped inside a single path segment: everything a URI
/// reserves there, and nothing more.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

/// Query values escape everything but unreserved characters. Query
/// *keys* are never passed through this: JSON:API bracketed keys go on
/// the wire byte-for-byte.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A fully assembled request, ready for the transport. Built per call
/// and discarded with the response.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    pub operation: String,
    pub method: HttpMethod,
    /// Absolute URL, query string included.
    pub url: String,
    pub body: Option<RequestBody>,
    /// Filled in by the pipeline once auth headers are minted.
    pub headers: HashMap<String, String>,
}

/// Build the plan for one call. Required parameters are checked first
/// in declaration order, so the caller always hears about the earliest
/// missing argument.
pub fn build_plan(
    base_url: &str,
    descriptor: &EndpointDescriptor,
    args: &Map<String, Value>,
) -> Result<RequestPlan> {
    for param in &descriptor.params {
        if param.required && is_unset(args.get(param.arg_name)) {
            return Err(ApiError::MissingRequiredParameter {
                operation: descriptor.operation_id.to_string(),
                arg: param.arg_name.to_string(),
            });
        }
    }

    let mut path = descriptor.path_template.to_string();
    for param in descriptor.params_with(Placement::Path) {
        // Required check above guarantees presence.
        let value = &args[param.arg_name];
        let encoded =
            utf8_percent_encode(&stringify(value), PATH_SEGMENT).to_string();
        path = path.replace(&format!("{{{}}}", param.arg_name), &encoded);
    }

    let mut query_pairs = Vec::new();
    for param in descriptor.params_with(Placement::Query) {
        match args.get(param.arg_name) {
            None | Some(Value::Null) => {}
            Some(value) => {
                let encoded = utf8_percent_encode(&stringify(value), QUERY_VALUE).to_string();
                // Wire name emitted literally; brackets survive.
                query_pairs.push(format!("{}={}", param.wire_name, encoded));
            }
        }
    }

    let mut url = format!("{}{}", base_url.trim_end_matches('/'), path);
    if !query_pairs.is_empty() {
        url.push('?');
        url.push_str(&query_pairs.join("&"));
    }

    let body = if descriptor.method.allows_body() {
        build_body(descriptor, args)
    } else {
        None
    };

    Ok(RequestPlan {
        operation: descriptor.operation_id.to_string(),
        method: descriptor.method,
        url,
        body,
        headers: HashMap::new(),
    })
}

fn build_body(descriptor: &EndpointDescriptor, args: &Map<String, Value>) -> Option<RequestBody> {
    match descriptor.body_kind {
        BodyKind::Json => {
            let mut envelope = Map::new();
            for param in descriptor.params_with(Placement::Body) {
                match args.get(param.arg_name) {
                    // Null-valued top-level keys are stripped; nested
                    // nulls inside the supplied value are untouched.
                    None | Some(Value::Null) => {}
                    Some(value) => {
                        envelope.insert(param.wire_name.to_string(), value.clone());
                    }
                }
            }
            if envelope.is_empty() {
                None
            } else {
                Some(RequestBody::Json(Value::Object(envelope)))
            }
        }
        BodyKind::Multipart => {
            let mut fields = Vec::new();
            for param in descriptor.params_with(Placement::Body) {
                match args.get(param.arg_name) {
                    None | Some(Value::Null) => {}
                    Some(value) => {
                        let value = if param.is_file {
                            MultipartValue::File(PathBuf::from(stringify(value)))
                        } else {
                            MultipartValue::Text(stringify(value))
                        };
                        fields.push(MultipartField {
                            name: param.wire_name.to_string(),
                            value,
                        });
                    }
                }
            }
            Some(RequestBody::Multipart(fields))
        }
    }
}

fn is_unset(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Natural textual form for the wire: strings pass through, booleans
/// become `true`/`false`, arrays join with commas. Objects fall back
/// to compact JSON, which only a misused `filter` would ever hit.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(stringify)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::EndpointDescriptor;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn get_campaign() -> EndpointDescriptor {
        EndpointDescriptor::get("get_campaign", "/api/campaigns/{id}")
            .path("id")
            .query_as("fields_campaign", "fields[campaign]")
            .query("include")
            .build()
    }

    #[test]
    fn test_brackets_survive_in_query_keys() {
        let plan = build_plan(
            "https://a.klaviyo.com",
            &get_campaign(),
            &args(json!({
                "id": "01HABC",
                "fields_campaign": "send_time,name",
                "include": "tags"
            })),
        )
        .unwrap();
        assert_eq!(
            plan.url,
            "https://a.klaviyo.com/api/campaigns/01HABC?fields[campaign]=send_time%2Cname&include=tags"
        );
    }

    #[test]
    fn test_null_and_absent_query_params_are_omitted() {
        let plan = build_plan(
            "https://a.klaviyo.com",
            &get_campaign(),
            &args(json!({"id": "01HABC", "fields_campaign": null})),
        )
        .unwrap();
        assert_eq!(plan.url, "https://a.klaviyo.com/api/campaigns/01HABC");
    }

    #[test]
    fn test_missing_required_path_param() {
        let err = build_plan("https://a.klaviyo.com", &get_campaign(), &args(json!({})))
            .unwrap_err();
        match err {
            ApiError::MissingRequiredParameter { operation, arg } => {
                assert_eq!(operation, "get_campaign");
                assert_eq!(arg, "id");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_explicit_null_counts_as_missing() {
        let err = build_plan(
            "https://a.klaviyo.com",
            &get_campaign(),
            &args(json!({"id": null})),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::MissingRequiredParameter { .. }));
    }

    #[test]
    fn test_path_values_are_segment_encoded() {
        let plan = build_plan(
            "https://a.klaviyo.com",
            &get_campaign(),
            &args(json!({"id": "a/b c"})),
        )
        .unwrap();
        assert_eq!(plan.url, "https://a.klaviyo.com/api/campaigns/a%2Fb%20c");
    }

    #[test]
    fn test_object_body_envelope() {
        let descriptor = EndpointDescriptor::post("create_event", "/api/events")
            .data()
            .build();
        let data = json!({"type": "event", "attributes": {"properties": {"sku": "X"}}});
        let plan = build_plan(
            "https://a.klaviyo.com",
            &descriptor,
            &args(json!({"data": data})),
        )
        .unwrap();
        match plan.body.unwrap() {
            RequestBody::Json(body) => assert_eq!(body, json!({"data": data})),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_array_body_passes_through() {
        let descriptor = EndpointDescriptor::post(
            "add_profiles_to_list",
            "/api/lists/{id}/relationships/profiles",
        )
        .path("id")
        .data()
        .build();
        let data = json!([{"type": "profile", "id": "P1"}, {"type": "profile", "id": "P2"}]);
        let plan = build_plan(
            "https://a.klaviyo.com",
            &descriptor,
            &args(json!({"id": "LIST1", "data": data})),
        )
        .unwrap();
        assert_eq!(
            plan.url,
            "https://a.klaviyo.com/api/lists/LIST1/relationships/profiles"
        );
        match plan.body.unwrap() {
            RequestBody::Json(body) => assert_eq!(body["data"], data),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_empty_array_body_is_preserved() {
        // PATCH with data: [] clears associations; it must not be
        // collapsed into "no body".
        let descriptor = EndpointDescriptor::patch(
            "update_flow_tags",
            "/api/flows/{id}/relationships/tags",
        )
        .path("id")
        .data()
        .build();
        let plan = build_plan(
            "https://a.klaviyo.com",
            &descriptor,
            &args(json!({"id": "FLOW1", "data": []})),
        )
        .unwrap();
        match plan.body.unwrap() {
            RequestBody::Json(body) => assert_eq!(body, json!({"data": []})),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_nested_nulls_inside_data_are_preserved() {
        let descriptor = EndpointDescriptor::patch("update_profile", "/api/profiles/{id}")
            .path("id")
            .data()
            .build();
        let data = json!({"type": "profile", "id": "P1", "attributes": {"title": null}});
        let plan = build_plan(
            "https://a.klaviyo.com",
            &descriptor,
            &args(json!({"id": "P1", "data": data})),
        )
        .unwrap();
        match plan.body.unwrap() {
            RequestBody::Json(body) => {
                assert_eq!(body["data"]["attributes"]["title"], Value::Null);
                assert!(body["data"]["attributes"]
                    .as_object()
                    .unwrap()
                    .contains_key("title"));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_query_stringification() {
        let descriptor = EndpointDescriptor::get("list_profiles", "/api/profiles")
            .query_as("fields_profile", "fields[profile]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build();
        let plan = build_plan(
            "https://a.klaviyo.com",
            &descriptor,
            &args(json!({
                "fields_profile": ["email", "first_name"],
                "page_size": 50,
                "sort": "-created"
            })),
        )
        .unwrap();
        assert_eq!(
            plan.url,
            "https://a.klaviyo.com/api/profiles?fields[profile]=email%2Cfirst_name&page[size]=50&sort=-created"
        );
    }

    #[test]
    fn test_boolean_query_values() {
        let descriptor = EndpointDescriptor::get("list_things", "/api/things")
            .query("archived")
            .build();
        let plan = build_plan(
            "https://a.klaviyo.com",
            &descriptor,
            &args(json!({"archived": true})),
        )
        .unwrap();
        assert_eq!(plan.url, "https://a.klaviyo.com/api/things?archived=true");
    }

    #[test]
    fn test_multipart_body_fields() {
        let descriptor = EndpointDescriptor::post("upload_image_from_file", "/api/image-upload")
            .multipart()
            .file_field("file")
            .field("name")
            .field("hidden")
            .build();
        let plan = build_plan(
            "https://a.klaviyo.com",
            &descriptor,
            &args(json!({"file": "/tmp/logo.png", "name": "logo", "hidden": false})),
        )
        .unwrap();
        match plan.body.unwrap() {
            RequestBody::Multipart(fields) => {
                assert_eq!(fields.len(), 3);
                assert!(matches!(
                    &fields[0].value,
                    MultipartValue::File(p) if p == &PathBuf::from("/tmp/logo.png")
                ));
                assert!(matches!(
                    &fields[2].value,
                    MultipartValue::Text(t) if t == "false"
                ));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
