//! Static description of a single Klaviyo endpoint: method, path
//! template, parameter placement and the JSON:API envelope shape.
//! Descriptors are constructed once at load time and never mutated.

use klaviyo_core::HttpMethod;

/// Where an argument lands in the emitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Substituted into a `{name}` slot of the path template.
    Path,
    /// Emitted under its wire name in the query string.
    Query,
    /// A top-level key of the request body envelope.
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    /// `/api/*`: bearer token required.
    Private,
    /// `/client/*`: no Authorization header, `company_id` query param
    /// identifies the site instead.
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// JSON:API envelope, `{"data": ...}`.
    Json,
    /// `multipart/form-data` with named text and file fields
    /// (image upload from a local file).
    Multipart,
}

#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Caller-visible argument name (`fields_campaign`).
    pub arg_name: &'static str,
    /// Name on the wire (`fields[campaign]`); equals `arg_name` when
    /// no translation is needed. Sent byte-for-byte, never re-encoded.
    pub wire_name: &'static str,
    pub placement: Placement,
    pub required: bool,
    /// Multipart file field: the argument is a local file path whose
    /// contents become the part body.
    pub is_file: bool,
}

#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    /// Unique operation name, also the advertised tool name.
    pub operation_id: &'static str,
    pub method: HttpMethod,
    /// Path with `{arg_name}` placeholders, e.g. `/api/campaigns/{id}`.
    pub path_template: &'static str,
    pub description: &'static str,
    pub auth: AuthKind,
    pub body_kind: BodyKind,
    /// Declaration order is the caller-visible argument order.
    pub params: Vec<ParamSpec>,
}

impl EndpointDescriptor {
    pub fn get(operation_id: &'static str, path_template: &'static str) -> EndpointBuilder {
        EndpointBuilder::new(operation_id, HttpMethod::Get, path_template)
    }

    pub fn post(operation_id: &'static str, path_template: &'static str) -> EndpointBuilder {
        EndpointBuilder::new(operation_id, HttpMethod::Post, path_template)
    }

    pub fn patch(operation_id: &'static str, path_template: &'static str) -> EndpointBuilder {
        EndpointBuilder::new(operation_id, HttpMethod::Patch, path_template)
    }

    pub fn delete(operation_id: &'static str, path_template: &'static str) -> EndpointBuilder {
        EndpointBuilder::new(operation_id, HttpMethod::Delete, path_template)
    }

    pub fn is_public(&self) -> bool {
        self.auth == AuthKind::Public
    }

    /// Placeholder names appearing in the path template, in order.
    pub fn path_placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.path_template;
        while let Some(open) = rest.find('{') {
            rest = &rest[open + 1..];
            if let Some(close) = rest.find('}') {
                names.push(&rest[..close]);
                rest = &rest[close + 1..];
            } else {
                break;
            }
        }
        names
    }

    pub fn params_with(&self, placement: Placement) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(move |p| p.placement == placement)
    }
}

/// Chained construction of a descriptor. `build` validates that the
/// path placeholders and the path-placement params agree, so a typo in
/// the static table fails at first registry access rather than on some
/// later call.
pub struct EndpointBuilder {
    descriptor: EndpointDescriptor,
}

impl EndpointBuilder {
    fn new(operation_id: &'static str, method: HttpMethod, path_template: &'static str) -> Self {
        Self {
            descriptor: EndpointDescriptor {
                operation_id,
                method,
                path_template,
                description: "",
                auth: AuthKind::Private,
                body_kind: BodyKind::Json,
                params: Vec::new(),
            },
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.descriptor.description = description;
        self
    }

    /// Mark as a `/client/*` endpoint: no bearer header, and the
    /// public `company_id` query parameter is added as required.
    pub fn public(mut self) -> Self {
        self.descriptor.auth = AuthKind::Public;
        self.push(ParamSpec {
            arg_name: "company_id",
            wire_name: "company_id",
            placement: Placement::Query,
            required: true,
            is_file: false,
        });
        self
    }

    /// Path placeholder argument. Always required.
    pub fn path(mut self, arg_name: &'static str) -> Self {
        self.push(ParamSpec {
            arg_name,
            wire_name: arg_name,
            placement: Placement::Path,
            required: true,
            is_file: false,
        });
        self
    }

    /// Optional query parameter whose wire name equals the arg name
    /// (`include`, `filter`, `sort`).
    pub fn query(self, arg_name: &'static str) -> Self {
        self.query_as(arg_name, arg_name)
    }

    /// Optional query parameter with a distinct wire spelling, e.g.
    /// `fields_campaign` -> `fields[campaign]`. The wire name is kept
    /// verbatim, brackets included.
    pub fn query_as(mut self, arg_name: &'static str, wire_name: &'static str) -> Self {
        self.push(ParamSpec {
            arg_name,
            wire_name,
            placement: Placement::Query,
            required: false,
            is_file: false,
        });
        self
    }

    pub fn required_query(mut self, arg_name: &'static str) -> Self {
        self.push(ParamSpec {
            arg_name,
            wire_name: arg_name,
            placement: Placement::Query,
            required: true,
            is_file: false,
        });
        self
    }

    /// The required JSON:API `data` envelope member. The supplied JSON
    /// (object, or array for relationship endpoints) is embedded
    /// verbatim.
    pub fn data(mut self) -> Self {
        self.push(ParamSpec {
            arg_name: "data",
            wire_name: "data",
            placement: Placement::Body,
            required: true,
            is_file: false,
        });
        self
    }

    /// Switch the body to `multipart/form-data`. Follow with `field`
    /// and `file_field` calls.
    pub fn multipart(mut self) -> Self {
        self.descriptor.body_kind = BodyKind::Multipart;
        self
    }

    /// Optional text field of a multipart body.
    pub fn field(mut self, arg_name: &'static str) -> Self {
        self.push(ParamSpec {
            arg_name,
            wire_name: arg_name,
            placement: Placement::Body,
            required: false,
            is_file: false,
        });
        self
    }

    /// Required file field of a multipart body; the argument is a
    /// local file path.
    pub fn file_field(mut self, arg_name: &'static str) -> Self {
        self.push(ParamSpec {
            arg_name,
            wire_name: arg_name,
            placement: Placement::Body,
            required: true,
            is_file: true,
        });
        self
    }

    fn push(&mut self, param: ParamSpec) {
        debug_assert!(
            !self
                .descriptor
                .params
                .iter()
                .any(|p| p.arg_name == param.arg_name),
            "duplicate parameter '{}' on '{}'",
            param.arg_name,
            self.descriptor.operation_id
        );
        self.descriptor.params.push(param);
    }

    pub fn build(self) -> EndpointDescriptor {
        let descriptor = self.descriptor;
        let placeholders = descriptor.path_placeholders();
        let path_params: Vec<&str> = descriptor
            .params_with(Placement::Path)
            .map(|p| p.arg_name)
            .collect();
        assert_eq!(
            placeholders, path_params,
            "path placeholders and path params disagree on '{}'",
            descriptor.operation_id
        );
        if !descriptor.method.allows_body() {
            assert!(
                descriptor.params_with(Placement::Body).next().is_none(),
                "'{}' declares a body on a {} endpoint",
                descriptor.operation_id,
                descriptor.method
            );
        }
        descriptor
    }
}
