use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_forms", "/api/forms")
            .describe("List sign-up forms.")
            .query_as("fields_form", "fields[form]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build(),
        EndpointDescriptor::get("get_form", "/api/forms/{id}")
            .describe("Get a form by id.")
            .path("id")
            .query_as("fields_form_version", "fields[form-version]")
            .query_as("fields_form", "fields[form]")
            .query("include")
            .build(),
        EndpointDescriptor::get("get_form_version", "/api/form-versions/{id}")
            .describe("Get a form version by id.")
            .path("id")
            .query_as("fields_form_version", "fields[form-version]")
            .build(),
        EndpointDescriptor::get("get_versions_for_form", "/api/forms/{id}/form-versions")
            .describe("List the versions of a form.")
            .path("id")
            .query_as("fields_form_version", "fields[form-version]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build(),
        EndpointDescriptor::get(
            "get_version_ids_for_form",
            "/api/forms/{id}/relationships/form-versions",
        )
        .describe("List the version ids of a form.")
        .path("id")
        .build(),
        EndpointDescriptor::get("get_form_for_form_version", "/api/form-versions/{id}/form")
            .describe("Get the parent form of a form version.")
            .path("id")
            .query_as("fields_form", "fields[form]")
            .build(),
        EndpointDescriptor::get(
            "get_form_id_for_form_version",
            "/api/form-versions/{id}/relationships/form",
        )
        .describe("Get the parent form id of a form version.")
        .path("id")
        .build(),
    ]
}
